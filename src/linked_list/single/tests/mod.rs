use std::vec::Vec;

use super::list::SList;

mod props;

pub(super) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Payload values, front to back.
pub(super) fn values(list: &SList<&i32>) -> Vec<i32> {
    list.iter().map(|v| **v).collect()
}
