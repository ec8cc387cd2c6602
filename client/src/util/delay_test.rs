#![cfg(not(feature = "hydrate"))]

use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn run_after_fires_immediately_outside_browser() {
    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);
    run_after(Duration::from_millis(1500), move || flag.set(true));
    assert!(fired.get());
}

#[test]
fn run_after_preserves_submission_order() {
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));
    for i in 0..3 {
        let order = Rc::clone(&order);
        run_after(Duration::from_millis(10), move || order.borrow_mut().push(i));
    }
    assert_eq!(*order.borrow(), [0, 1, 2]);
}
