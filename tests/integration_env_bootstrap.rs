use liblog::{EnvSource, Level, Logger, LoggerConfig};
use std::fs;
use tempfile::TempDir;

fn logger_with_env(vars: Vec<(String, String)>) -> Logger {
    let config = LoggerConfig::default().with_env(EnvSource::fixed(vars));
    let logger = Logger::new(config);
    logger.register_builtin_plugins().expect("register builtins");
    logger
}

/// A file URI in the namespace variable selects the file backend on first
/// dispatch and the level prefix becomes the threshold.
#[test]
fn file_backend_bootstrapped_from_environment() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("x.log");
    let value = format!("3,file://{}", path.display());
    let logger = logger_with_env(vec![("LIBLOG_APP".into(), value)]);

    assert!(!path.exists());
    logger
        .dispatch("APP", Level::Warning, format_args!("suppressed"))
        .expect("dispatch");
    assert!(path.exists(), "first dispatch should create the log file");
    assert_eq!(logger.get_level("APP").unwrap(), Level::Err);
    assert_eq!(logger.namespaces().get("APP").unwrap().backend_kind(), "file");

    logger
        .dispatch("APP", Level::Crit, format_args!("disk {} failed", 2))
        .expect("dispatch");
    logger.teardown();

    let contents = fs::read_to_string(&path).expect("read log");
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.ends_with(";APP;2;disk 2 failed\n"), "{contents:?}");
    assert!(!contents.contains("suppressed"));
}

/// An unregistered scheme still applies the level but keeps stderr.
#[test]
fn unknown_scheme_keeps_level_and_falls_back() {
    let logger = logger_with_env(vec![("LIBLOG".into(), "2,badscheme:nonsense".into())]);

    let root = logger.lookup_or_create("").expect("root namespace");
    assert_eq!(root.level(), Level::Crit);
    assert_eq!(root.backend_kind(), "stderr");
    logger
        .dispatch("", Level::Crit, format_args!("goes to stderr"))
        .expect("dispatch");
}

/// File URIs with anything but a path are rejected and degrade to stderr.
#[test]
fn file_uri_with_host_degrades_to_default() {
    let logger = logger_with_env(vec![(
        "LIBLOG_NET".into(),
        "6,file://example.com/tmp/net.log".into(),
    )]);

    let ns = logger.lookup_or_create("net").expect("namespace");
    assert_eq!(ns.level(), Level::Info);
    assert_eq!(ns.backend_kind(), "stderr");
}

/// Namespaces are matched exactly but variables are looked up uppercased.
#[test]
fn lowercase_namespace_reads_uppercase_variable() {
    let logger = logger_with_env(vec![("LIBLOG_DB".into(), "1,color:".into())]);

    let ns = logger.lookup_or_create("db").expect("namespace");
    assert_eq!(ns.level(), Level::Alert);
    assert_eq!(ns.backend_kind(), "color");

    // "DB" is a different namespace, configured by the same variable.
    assert!(logger.namespaces().get("DB").is_none());
    assert_eq!(logger.get_level("DB").unwrap(), Level::Alert);
    assert_eq!(logger.namespaces().len(), 2);
}

/// Threads racing on a file namespace's first dispatch share one open file,
/// so no record is lost to a second truncation.
#[test]
fn concurrent_first_dispatch_keeps_every_file_record() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("race.log");
    let value = format!("7,file://{}", path.display());
    let logger = std::sync::Arc::new(logger_with_env(vec![("LIBLOG_RACE".into(), value)]));
    let barrier = std::sync::Arc::new(std::sync::Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let logger = logger.clone();
            let barrier = barrier.clone();
            std::thread::spawn(move || {
                barrier.wait();
                for i in 0..25 {
                    logger
                        .dispatch("RACE", Level::Info, format_args!("t{} m{}", t, i))
                        .expect("dispatch");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("join");
    }
    logger.teardown();

    let contents = fs::read_to_string(&path).expect("read log");
    assert!(!contents.contains('\0'), "file was truncated under a writer");
    assert_eq!(contents.lines().count(), 200);
    assert!(contents.lines().all(|l| l.contains(";RACE;6;t")));
}

/// `file:name` would be re-rooted at `/name`; it is refused instead.
#[test]
fn relative_file_uri_degrades_to_default() {
    let logger = logger_with_env(vec![("LIBLOG_REL".into(), "4,file:rel.log".into())]);

    let ns = logger.lookup_or_create("REL").expect("namespace");
    assert_eq!(ns.level(), Level::Warning);
    assert_eq!(ns.backend_kind(), "stderr");
    assert!(matches!(
        logger.setup("REL", Level::Debug, "file:rel.log"),
        Err(liblog::LogError::OpenFailed { .. })
    ));
}
