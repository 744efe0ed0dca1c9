#![no_main]

use bible_structure::slugify;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|name: &str| {
    let slug = slugify(name);
    assert!(slug.is_ascii());
    assert!(!slug.contains(' '));
    assert!(!slug.chars().any(|c| c.is_ascii_uppercase()));
    assert_eq!(slug, slugify(name));
});
