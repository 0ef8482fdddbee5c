pub mod mocks;

#[allow(dead_code)]
pub fn setup() {
    // Common test setup code can go here
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
}
