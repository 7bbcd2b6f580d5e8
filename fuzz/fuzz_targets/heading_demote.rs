#![no_main]

use issue_summary::issue_heading::demote_headings;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let once = demote_headings(&raw);
    assert_eq!(demote_headings(&once), once);
    assert_eq!(once.lines().count(), raw.lines().count());
    for line in once.lines() {
        if line.starts_with('#') && !line.starts_with("###") {
            assert!(line.trim_start_matches('#').contains('#'));
        }
    }
});
