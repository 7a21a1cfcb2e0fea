use super::*;

// =============================================================
// Native behavior (no sessionStorage available)
// =============================================================

#[test]
fn flag_reads_absent_without_storage() {
    assert!(!is_authenticated());
}

#[test]
fn mutations_are_noops_without_storage() {
    set_authenticated();
    assert!(!is_authenticated());
    clear();
    assert!(!is_authenticated());
}
