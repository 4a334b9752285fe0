use std::sync::Arc;

use confmap::error::Error;
use confmap::observe::{MetricsObserver, DEEPEST_WALK_GAUGE, LOOKUP_COUNTER};
use confmap::{MapConfig, Metrics, SettingsLoader};

use crate::fixtures::TestFixtures;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_then_overlay_from_files() {
        let session = TestFixtures::write_temp("session", TestFixtures::get_session());
        let overlay = TestFixtures::write_temp("Xresources", TestFixtures::get_xresources());

        let mut loader = SettingsLoader::new(MapConfig::default()).unwrap();
        let loaded = loader.load_session_file(&session).unwrap();
        assert_eq!(loaded.inserted, 8);

        let applied = loader.overlay_xresources_file(&overlay).unwrap();
        assert_eq!(applied.overridden, 3);
        assert_eq!(applied.inserted, 1);

        let settings = loader.finish();
        assert_eq!(settings.get("Font").unwrap(), "DejaVu Sans Mono");
        assert_eq!(settings.get_parsed::<u32>("FontHeight").unwrap(), 12);
        assert_eq!(settings.get("Colour0").unwrap(), "0,0,0");
        assert_eq!(settings.get("HostName").unwrap(), "example.com");
        assert_eq!(settings.get("UserName").unwrap(), "");
        assert_eq!(settings.get_parsed::<u32>("ScrollbackLines").unwrap(), 5000);
        assert!(settings.get("vt100.faceName").unwrap_err().is_not_found());
        assert_eq!(settings.len(), 9);
    }

    #[test]
    fn test_lookup_falls_back_to_default() {
        let mut loader = SettingsLoader::new(MapConfig::with_buckets(16)).unwrap();
        loader.load_session(TestFixtures::get_session()).unwrap();
        let settings = loader.finish();

        assert_eq!(settings.get_or("CloseOnExit", "1"), "1");
        assert_eq!(settings.get_or("TermWidth", "132"), "80");
    }

    #[test]
    fn test_malformed_source_reports_line() {
        let mut loader = SettingsLoader::new(MapConfig::default()).unwrap();
        match loader.load_session(TestFixtures::get_malformed_session()) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_yaml_config_drives_loader() {
        let path = TestFixtures::write_temp(
            "confmap.yaml",
            "bucket_count: 1\ntrace_lookups: true\nresource_class: XTerm\n",
        );
        let config = MapConfig::from_file(&path).unwrap();
        let mut loader = SettingsLoader::new(config).unwrap();
        loader.load_session(TestFixtures::get_session()).unwrap();
        loader.overlay_xresources(TestFixtures::get_xresources()).unwrap();

        let mut settings = loader.finish();
        let stats = settings.stats();
        assert_eq!(stats.bucket_count, 1);
        assert_eq!(stats.longest_chain, stats.entries);
        // Only the class-less `*Colour0` line applies to XTerm.
        assert_eq!(settings.get("Colour0").unwrap(), "0,0,0");
        assert_eq!(settings.get("vt100.faceName").unwrap(), "ignored");

        let metrics = Arc::new(Metrics::new());
        settings.set_observer(Arc::new(MetricsObserver::new(metrics.clone())));
        settings.get("HostName").unwrap();
        settings.get("vt100.faceName").unwrap();
        assert_eq!(metrics.get_counter(LOOKUP_COUNTER), 2);
        assert!(metrics.get_gauge(DEEPEST_WALK_GAUGE) >= 1.0);
    }
}
