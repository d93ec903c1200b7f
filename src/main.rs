use std::io;

fn main() -> io::Result<()> {
    vlift::cli::main()
}
