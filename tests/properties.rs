#![cfg(feature = "yaml")]

use proptest::prelude::*;

#[path = "support/mod.rs"]
mod support;

use skillcheck::{validate_skill, Validator};
use support::{body_lines, SkillFixture, GOOD_DESCRIPTION};

proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]

    #[test]
    fn kebab_case_names_matching_their_dir_are_clean(
        name in "[a-z0-9]{1,12}(-[a-z0-9]{1,12}){0,3}"
    ) {
        let fx = SkillFixture::new();
        let dir = fx.write_descriptor(
            &name,
            &format!("name: \"{name}\"\ndescription: {GOOD_DESCRIPTION}"),
            "body",
        );
        let outcome = Validator::default().validate(&dir).unwrap();
        prop_assert!(outcome.valid, "{}", outcome.report());
        prop_assert_eq!(outcome.warnings().count(), 0);
    }

    #[test]
    fn validation_is_idempotent(
        description in "[ -~]{0,80}",
        lines in 0usize..20,
    ) {
        let fx = SkillFixture::new();
        let escaped = description.replace('\\', "\\\\").replace('"', "\\\"");
        let dir = fx.write_descriptor(
            "demo",
            &format!("name: demo\ndescription: \"{escaped}\""),
            &body_lines(lines),
        );
        prop_assert_eq!(validate_skill(&dir).unwrap(), validate_skill(&dir).unwrap());
    }
}
