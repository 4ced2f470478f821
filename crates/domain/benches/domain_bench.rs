use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Aggregate, Cart, CartSession, Money, Sku};

fn filled_session(lines: usize) -> CartSession {
    let mut session = CartSession::new();
    for n in 0..lines {
        session
            .add_item(format!("SKU-{n:03}"), 1, Money::from_minor(100 + n as i64))
            .unwrap();
    }
    session
}

fn filled_cart(lines: usize) -> Cart {
    let mut cart = Cart::new();
    for n in 0..lines {
        cart.add_item(
            &Sku::new(format!("SKU-{n:03}")),
            2,
            Money::from_minor(100 + n as i64),
        )
        .unwrap();
    }
    cart
}

fn bench_perform_add_item(c: &mut Criterion) {
    c.bench_function("domain/perform_add_item", |b| {
        b.iter(|| {
            let mut session = CartSession::new();
            session
                .add_item("SKU-BENCH", 1, Money::from_minor(1000))
                .unwrap();
            black_box(session.total());
        });
    });
}

fn bench_undo_redo_cycle(c: &mut Criterion) {
    let mut session = filled_session(50);
    session.apply_coupon(10).unwrap();

    c.bench_function("domain/undo_redo_cycle_50_lines", |b| {
        b.iter(|| {
            session.undo();
            session.redo();
        });
    });
}

fn bench_full_command_cycle(c: &mut Criterion) {
    c.bench_function("domain/add_coupon_remove_undo_all", |b| {
        b.iter(|| {
            let mut session = CartSession::new();
            session
                .add_item("SKU-001", 2, Money::from_minor(1299))
                .unwrap();
            session
                .add_item("SKU-002", 1, Money::from_minor(799))
                .unwrap();
            session.apply_coupon(10).unwrap();
            session.remove_item("SKU-001", 1).unwrap();
            while session.undo().is_some() {}
            black_box(session.total());
        });
    });
}

fn bench_snapshot_restore_100(c: &mut Criterion) {
    let mut cart = filled_cart(100);

    c.bench_function("domain/snapshot_restore_100_lines", |b| {
        b.iter(|| {
            let snapshot = cart.snapshot();
            cart.restore(black_box(&snapshot));
        });
    });
}

fn bench_total_100(c: &mut Criterion) {
    let mut cart = filled_cart(100);
    cart.apply_coupon(15).unwrap();

    c.bench_function("domain/total_100_lines", |b| {
        b.iter(|| black_box(cart.total()));
    });
}

criterion_group!(
    benches,
    bench_perform_add_item,
    bench_undo_redo_cycle,
    bench_full_command_cycle,
    bench_snapshot_restore_100,
    bench_total_100,
);
criterion_main!(benches);
