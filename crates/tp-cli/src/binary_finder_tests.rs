// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn falls_back_to_bare_name_when_no_sibling_exists() {
    let found = find_sibling_binary("tp-definitely-not-a-real-binary");
    assert_eq!(found, PathBuf::from("tp-definitely-not-a-real-binary"));
}
