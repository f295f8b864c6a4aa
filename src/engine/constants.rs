// Default limits for the visualizer engines

/// Maximum number of nodes the binary search tree accepts
pub const DEFAULT_MAX_NODES: usize = 15;

/// Number of buckets in the hash table
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Delay between animation steps during autoplay, in milliseconds
pub const DEFAULT_STEP_DELAY_MS: u64 = 800;

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "STRUCTVIZ_LOG";
