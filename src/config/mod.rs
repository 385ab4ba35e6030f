// ==========================================
// 学生实习数据汇总 - 配置层
// ==========================================
// 职责: 提取规则、批处理、导出配置
// 来源: 默认值 → JSON 文件 → 环境变量
// ==========================================

pub mod config_manager;
pub mod consolidator_config;
pub mod error;

// 重导出核心配置类型
pub use config_manager::{config_keys, ConfigManager};
pub use consolidator_config::{BatchConfig, ConsolidatorConfig, ExportConfig, ExtractionConfig};
pub use error::ConfigError;
