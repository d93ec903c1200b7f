use crate::arch::tigress::Register;
use crate::il::{BinaryOp, Control, Expr, IlSink, ListBuilder, Machine, Stmt};

fn konst(value: u64) -> Expr {
    Expr::Const { width: 8, value }
}

#[test]
fn machine_stack_grows_down() {
    let mut machine = Machine::new(Register::Vsp, 0x1000);

    machine.push(8, 0x0102_0304_0506_0708);
    assert_eq!(machine.get_register(Register::Vsp), 0xFF8);
    assert_eq!(machine.read(0xFF8, 1), 0x08);
    assert_eq!(machine.read(0xFFF, 1), 0x01);

    assert_eq!(machine.pop(8), 0x0102_0304_0506_0708);
    assert_eq!(machine.get_register(Register::Vsp), 0x1000);
}

#[test]
fn binary_operands_evaluate_left_first() {
    let mut machine = Machine::new(Register::Vsp, 0x1000);
    machine.push(8, 3);
    machine.push(8, 10);

    let value = machine.eval(&Expr::Binary {
        op: BinaryOp::Sub,
        width: 8,
        lhs: Box::new(Expr::Pop { width: 8 }),
        rhs: Box::new(Expr::Pop { width: 8 }),
    });

    assert_eq!(value, 7);
}

#[test]
fn oversized_shifts_are_zero() {
    let mut machine = Machine::new(Register::Vsp, 0);

    for op in &[BinaryOp::Shl, BinaryOp::Lsr] {
        let value = machine.eval(&Expr::Binary {
            op: *op,
            width: 8,
            lhs: Box::new(konst(u64::MAX)),
            rhs: Box::new(konst(64)),
        });

        assert_eq!(value, 0);
    }
}

#[test]
fn run_stops_at_control_transfer() {
    let mut machine = Machine::new(Register::Vsp, 0x100);
    let stmts = vec![
        Stmt::Push {
            width: 8,
            value: konst(1),
        },
        Stmt::Jump { target: konst(0x40) },
        Stmt::Push {
            width: 8,
            value: konst(2),
        },
    ];

    assert_eq!(machine.run(&stmts), Control::Jump(0x40));
    assert_eq!(machine.pop(8), 1);
    assert_eq!(machine.get_register(Register::Vsp), 0x100);

    assert_eq!(machine.run(&[Stmt::Nop, Stmt::Ret]), Control::Return);
    assert_eq!(machine.run(&[Stmt::Nop]), Control::Continue);
}

#[test]
fn list_builder_tracks_addresses() {
    let mut builder = ListBuilder::new();

    builder.at(0x10);
    let value = builder.constant(8, 5);
    builder.push(8, value);

    builder.at(0x19);
    let addr = builder.pop(8);
    let value = builder.load(8, addr);
    builder.push(8, value);

    builder.at(0x1A);
    builder.ret();

    let addrs: Vec<u64> = builder.iter().map(|(a, _)| *a).collect();
    assert_eq!(addrs, vec![0x10, 0x19, 0x1A]);
    assert_eq!(builder.len(), 3);
    assert_eq!(builder.stack_effect(), 1);
}

#[test]
fn statement_display() {
    let store = Stmt::Store {
        width: 8,
        addr: Expr::Reg {
            width: 8,
            reg: Register::Vlhs,
        },
        value: Expr::Reg {
            width: 8,
            reg: Register::Vrhs,
        },
    };
    let push = Stmt::Push {
        width: 8,
        value: Expr::Load {
            width: 8,
            addr: Box::new(Expr::Pop { width: 8 }),
        },
    };

    assert_eq!(store.to_string(), "[vlhs].q = vrhs");
    assert_eq!(push.to_string(), "push.q([pop.q].q)");
    assert_eq!(Stmt::Jump { target: konst(0x11) }.to_string(), "jump(0x11)");
    assert_eq!(Stmt::Ret.to_string(), "return");
}

#[test]
fn statements_serialize() {
    let stmt = Stmt::SetReg {
        width: 8,
        reg: Register::Vlhs,
        value: Expr::Pop { width: 8 },
    };

    let json = serde_json::to_value(&stmt).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"set_reg": {"width": 8, "reg": "vlhs", "value": {"pop": {"width": 8}}}})
    );
}
