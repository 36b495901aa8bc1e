pub use {
    anyhow,
    arcstr,
    bio,
    itertools,
    log,
    pretty_env_logger,
    serde,
    serde_json,
};
