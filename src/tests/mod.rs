mod batch_tests;

use crate::PhoneNumberUtil;

static ONCE: std::sync::Once = std::sync::Once::new();

// This setup function simulates getting the PhoneNumberUtil instance for each test.
fn get_phone_util() -> PhoneNumberUtil {
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
    PhoneNumberUtil::new()
}
