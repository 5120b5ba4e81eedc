/// Source naming
pub const MESH_PREFIX: &str = "mesh500_";

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Attribution
pub const DATASET_NAME: &str =
    "Japan Oceanographic Data Center statistical product: 500m mesh depth data";
pub const DATASET_URL: &str = "https://www.jodc.go.jp/vpage/depth500_file_j.html";
pub const CITATION_FILENAME: &str = "citation.txt";
