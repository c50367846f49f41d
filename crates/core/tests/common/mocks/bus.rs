use mockall::mock;
use std::sync::{Arc, Mutex};
use vr4300_core::soc::Device;

mock! {
    pub BusDevice {}
    impl Device for BusDevice {
        fn name(&self) -> &'static str;
        fn address_range(&self) -> (u64, u64);
        fn read_word(&mut self, offset: u64) -> u32;
        fn write_word(&mut self, offset: u64, word: u32, dqm: u32);
    }
}

/// A thread-safe wrapper so the mock satisfies the bus's device bounds.
#[derive(Clone)]
pub struct SyncBusDevice {
    pub mock: Arc<Mutex<MockBusDevice>>,
}

impl SyncBusDevice {
    pub fn new(mock: MockBusDevice) -> Self {
        Self {
            mock: Arc::new(Mutex::new(mock)),
        }
    }
}

unsafe impl Send for SyncBusDevice {}
unsafe impl Sync for SyncBusDevice {}

impl Device for SyncBusDevice {
    fn name(&self) -> &'static str {
        "MOCK"
    }

    fn address_range(&self) -> (u64, u64) {
        self.mock.lock().unwrap().address_range()
    }

    fn read_word(&mut self, offset: u64) -> u32 {
        self.mock.lock().unwrap().read_word(offset)
    }

    fn write_word(&mut self, offset: u64, word: u32, dqm: u32) {
        self.mock.lock().unwrap().write_word(offset, word, dqm)
    }
}
