//! Property tests for URL joining

use proptest::prelude::*;
use word_gpt_core::client::join_url;

proptest! {
    #[test]
    fn joined_url_has_single_separator(
        host in "[a-z]{1,12}",
        base_slashes in 0usize..3,
        path in "[a-z][a-z0-9/-]{0,20}",
        path_slashes in 0usize..3,
    ) {
        let base = format!("http://{}.example.com{}", host, "/".repeat(base_slashes));
        let path_arg = format!("{}{}", "/".repeat(path_slashes), path);

        let url = join_url(&base, &path_arg);
        let expected = format!("http://{}.example.com/{}", host, path);
        prop_assert_eq!(url, expected);
    }
}
