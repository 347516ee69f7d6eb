use crate::ProgressWaitGroup;

#[cfg_attr(not(loom), test, should_panic)]
pub fn test_done_without_add() {
    let wg = ProgressWaitGroup::new();
    wg.done();
}

#[cfg_attr(not(loom), test, should_panic)]
pub fn test_done_beyond_registered() {
    let wg = ProgressWaitGroup::new();
    wg.add(1);
    wg.done();
    wg.done();
}
