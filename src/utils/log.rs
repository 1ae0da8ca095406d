use log::LevelFilter;

pub struct Logger;

impl Logger {
    pub fn init(verbosity: LevelFilter) {
        colog::default_builder().filter_level(verbosity).init();
    }
}
