#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_is_none_in_non_hydrate_tests() {
    assert!(read().is_none());
}

#[test]
fn write_and_clear_are_noops_but_callable() {
    write("token");
    assert!(read().is_none());
    clear();
}
