use super::*;

#[test]
fn test_now_is_monotonic() {
    let first = now();
    let second = now();
    assert!(first >= 0.0);
    assert!(second >= first);
}

#[test]
fn test_stopwatch_measures_sleep() {
    let watch = Stopwatch::start();
    std::thread::sleep(std::time::Duration::from_millis(5));
    let elapsed = watch.elapsed();
    assert!(elapsed >= 0.005, "elapsed {elapsed}");
    assert!(watch.finish("sleep") >= elapsed);
}
