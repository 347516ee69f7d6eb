use crate::ProgressWaitGroup;

#[cfg_attr(not(loom), test)]
pub fn test_token_registers_one_unit() {
    let wg = ProgressWaitGroup::new();
    let token = wg.token();
    assert_eq!(wg.total(), 1);
    assert!(!wg.is_done());
    token.done();
    assert!(wg.is_done());
    assert_eq!(wg.progress(), 1.0);
}

#[cfg_attr(not(loom), test)]
pub fn test_token_completes_on_drop() {
    let wg = ProgressWaitGroup::new();
    {
        let _token = wg.token();
        assert!(!wg.is_done());
    }
    assert!(wg.is_done());
    assert_eq!(wg.completed(), 1);
}

#[cfg_attr(not(loom), test)]
pub fn test_token_clone_registers_another() {
    let wg = ProgressWaitGroup::new();
    let token = wg.token();
    let cloned = token.clone();
    assert_eq!(wg.total(), 2);
    token.done();
    assert!(!wg.is_done());
    cloned.done();
    assert!(wg.is_done());
    assert_eq!(wg.progress(), 1.0);
}

#[cfg(not(loom))]
#[test]
fn test_token_moves_across_scoped_threads() {
    let wg = ProgressWaitGroup::new();
    std::thread::scope(|s| {
        for _ in 0..8 {
            let token = wg.token();
            s.spawn(move || token.done());
        }
        wg.wait();
    });
    assert_eq!(wg.total(), 8);
    assert_eq!(wg.progress(), 1.0);
}

#[cfg(not(loom))]
#[test]
fn test_token_released_when_worker_panics() {
    let wg = ProgressWaitGroup::new();
    std::thread::scope(|s| {
        let token = wg.token();
        let worker = s.spawn(move || {
            let _token = token;
            panic!("worker failed");
        });
        assert!(worker.join().is_err());
    });
    assert!(wg.is_done());
    assert_eq!(wg.completed(), 1);
    assert_eq!(wg.progress(), 1.0);
}
