//! End-to-end tests: file on disk through normalization, entry table and
//! typed lookup.

mod common;

use approx::assert_relative_eq;
use common::*;
use proptest::prelude::*;
use secini::domain::options::ParseOptions;

const SAMPLE_INI: &str = r#"; sample configuration
Section1
var1=10
var2=hello ; greeting
 indented=ignored

Section2
var1 = 20
ratio=3.14
name=abc
url=http://host/?a=b
"#;

mod loading {
    use super::*;

    #[test]
    fn full_file_mapping() {
        let adapter = load(SAMPLE_INI);
        let entries: Vec<_> = adapter.store().entries().collect();
        assert_eq!(
            entries,
            vec![
                ("Section1.var1", "10"),
                ("Section1.var2", "hello"),
                ("Section2.name", "abc"),
                ("Section2.ratio", "3.14"),
                ("Section2.url", "http://host/?a=b"),
                ("Section2.var1", "20"),
            ]
        );
    }

    #[test]
    fn loading_twice_is_idempotent() {
        let file = write_temp_ini(SAMPLE_INI);
        let first = FileConfigAdapter::from_file(file.path()).unwrap();
        let second = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(first.store(), second.store());
    }

    #[test]
    fn file_and_string_paths_agree() {
        let adapter = load(SAMPLE_INI);
        assert_eq!(adapter.store(), &ConfigStore::from_string(SAMPLE_INI));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileConfigAdapter::from_file(dir.path().join("absent.ini"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn loose_dialect_from_file() {
        let file = write_temp_ini(SAMPLE_INI);
        let adapter = FileConfigAdapter::from_file_with(file.path(), &ParseOptions::loose()).unwrap();
        assert_eq!(adapter.get_string("Section1.var2").unwrap(), "hello ");
        assert_eq!(adapter.get_string("Section2.var1 ").unwrap(), " 20");
    }

    #[test]
    fn empty_file_gives_empty_store() {
        let adapter = load("");
        assert!(adapter.store().is_empty());
    }
}

mod lookup {
    use super::*;

    #[test]
    fn string_lookup() {
        let adapter = load(SAMPLE_INI);
        assert_eq!(adapter.get_string("Section1.var2").unwrap(), "hello");
        assert!(matches!(
            adapter.get_string("NoSuch.key"),
            Err(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn double_lookup() {
        let adapter = load(SAMPLE_INI);
        assert_relative_eq!(adapter.get_double("Section2.ratio").unwrap(), 3.14);
        assert!(matches!(
            adapter.get_double("Section2.name"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn int_lookup_guard_applies_to_every_loaded_key() {
        let adapter = load(SAMPLE_INI);
        for (key, _) in adapter.store().entries() {
            assert!(matches!(
                adapter.get_int(key),
                Err(ConfigError::InvalidRequest { .. })
            ));
        }
    }

    #[test]
    fn int_lookup_on_unknown_unqualified_key_is_not_found() {
        let adapter = load(SAMPLE_INI);
        assert!(matches!(
            adapter.get_int("var1"),
            Err(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn unqualified_key_before_section() {
        let adapter = load("var=5\nSection1\nvar=6\n");
        assert_eq!(adapter.get_string(".var").unwrap(), "5");
        assert_eq!(adapter.get_string("Section1.var").unwrap(), "6");
    }

    #[test]
    fn last_write_wins_across_repeated_sections() {
        let adapter = load("Section1\na=1\nSection2\na=2\nSection1\na=3\n");
        assert_eq!(adapter.get_string("Section1.a").unwrap(), "3");
        assert_eq!(adapter.get_string("Section2.a").unwrap(), "2");
    }

    #[test]
    fn usable_through_port_trait_object() {
        let adapter = load(SAMPLE_INI);
        let port: &dyn ConfigPort = &adapter;
        assert_eq!(port.get_string("Section2.var1").unwrap(), "20");
    }
}

mod properties {
    use super::*;

    fn variable() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,8}"
    }

    fn value() -> impl Strategy<Value = String> {
        "[a-z0-9_./:=+-]{0,12}"
    }

    proptest! {
        #[test]
        fn string_round_trip(section in "[0-9]{1,3}", var in variable(), val in value()) {
            let content = format!("Section{section}\n{var}={val}\n");
            let store = ConfigStore::from_string(&content);
            let key = format!("Section{section}.{var}");
            prop_assert_eq!(store.get_string(&key).unwrap(), val);
        }

        #[test]
        fn parsing_is_deterministic(lines in prop::collection::vec("[A-Za-z0-9=; ]{0,16}", 0..20)) {
            let content = lines.join("\n");
            prop_assert_eq!(
                ConfigStore::from_string(&content),
                ConfigStore::from_string(&content)
            );
        }

        #[test]
        fn later_assignment_wins(var in variable(), first in value(), second in value()) {
            let content = format!("Section1\n{var}={first}\n{var}={second}\n");
            let store = ConfigStore::from_string(&content);
            prop_assert_eq!(store.get_string(&format!("Section1.{var}")).unwrap(), second);
            prop_assert_eq!(store.len(), 1);
        }
    }
}
