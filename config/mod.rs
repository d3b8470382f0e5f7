use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// algoviz 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgovizConfig {
    /// 步骤可视化配置
    pub visualization: VisualizationConfig,

    /// 随机输入生成配置
    pub generator: GeneratorConfig,

    /// 日志配置
    pub logging: LoggingConfig,
}

/// 步骤可视化配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationConfig {
    /// 是否记录步骤
    #[serde(default)]
    pub record_steps: bool,

    /// 最多保存的步骤数（0 表示不限制）
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,

    /// 输出格式：text, json
    #[serde(default = "default_format")]
    pub format: String,
}

/// 随机输入生成配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// 生成的数组长度
    #[serde(default = "default_array_size")]
    pub array_size: usize,

    /// 生成值的上限（包含）
    #[serde(default = "default_max_value")]
    pub max_value: u32,

    /// 随机种子，未设置时每次运行结果不同
    pub seed: Option<u64>,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别：trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 日志输出：stdout, file
    #[serde(default = "default_log_output")]
    pub output: String,

    /// 日志文件路径（当 output = file 时）
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// 默认值函数
// ============================================================================

fn default_max_steps() -> usize {
    500
}

fn default_format() -> String {
    "text".to_string()
}

fn default_array_size() -> usize {
    10
}

fn default_max_value() -> u32 {
    100
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_output() -> String {
    "stdout".to_string()
}

// ============================================================================
// 实现
// ============================================================================

impl Default for AlgovizConfig {
    fn default() -> Self {
        Self {
            visualization: VisualizationConfig {
                record_steps: false,
                max_steps: default_max_steps(),
                format: default_format(),
            },
            generator: GeneratorConfig {
                array_size: default_array_size(),
                max_value: default_max_value(),
                seed: None,
            },
            logging: LoggingConfig {
                level: default_log_level(),
                output: default_log_output(),
                log_file: None,
            },
        }
    }
}

impl AlgovizConfig {
    /// 从文件加载配置
    ///
    /// 配置加载顺序（优先级从低到高）：
    /// 1. 默认配置（内嵌的 default.toml）
    /// 2. 用户配置文件（可选，TOML 格式）
    /// 3. 环境变量（ALGOVIZ__ 前缀，使用双下划线分隔嵌套，如 ALGOVIZ__LOGGING__LEVEL）
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use algoviz::config::AlgovizConfig;
    ///
    /// // 加载配置（如果文件不存在，使用默认配置）
    /// let config = AlgovizConfig::from_file("algoviz.toml").unwrap();
    /// ```
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                include_str!("default.toml"),
                config::FileFormat::Toml,
            ))
            .add_source(
                config::File::new(path, config::FileFormat::Toml).required(false),
            )
            .add_source(config::Environment::with_prefix("ALGOVIZ").separator("__"))
            .build()
            .map_err(|e| format!("Failed to load config: {}", e))?;

        Ok(settings
            .try_deserialize()
            .map_err(|e| format!("Failed to parse config: {}", e))?)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &str) -> crate::Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, toml_string)
            .map_err(|e| format!("Failed to write config file: {}", e))?;
        Ok(())
    }

    /// 验证配置
    ///
    /// 检查输出格式、日志级别与日志文件，以及随机生成参数。
    pub fn validate(&self) -> Result<(), String> {
        match self.visualization.format.as_str() {
            "text" | "json" => {}
            _ => {
                return Err(format!(
                    "Invalid output format: '{}'. Must be one of: text, json",
                    self.visualization.format
                ))
            }
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(format!(
                    "Invalid log level: '{}'. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ))
            }
        }

        match self.logging.output.as_str() {
            "stdout" => {}
            "file" if self.logging.log_file.is_none() => {
                return Err(
                    "Log output is 'file' but log_file path is not specified".to_string(),
                );
            }
            "file" => {}
            _ => {
                return Err(format!(
                    "Invalid log output: '{}'. Must be one of: stdout, file",
                    self.logging.output
                ))
            }
        }

        if self.generator.array_size == 0 {
            return Err("Generator array_size must be greater than 0".to_string());
        }
        if self.generator.max_value == 0 {
            return Err("Generator max_value must be greater than 0".to_string());
        }

        Ok(())
    }

    /// 打印配置摘要
    pub fn print_summary(&self) {
        println!("📋 Algoviz Configuration:");
        println!(
            "   Record Steps: {}",
            if self.visualization.record_steps {
                "enabled"
            } else {
                "disabled"
            }
        );
        if self.visualization.max_steps == 0 {
            println!("   Max Steps:    unlimited");
        } else {
            println!("   Max Steps:    {}", self.visualization.max_steps);
        }
        println!("   Format:       {}", self.visualization.format);
        println!();
        println!("   Array Size:   {}", self.generator.array_size);
        println!("   Max Value:    {}", self.generator.max_value);
        match self.generator.seed {
            Some(seed) => println!("   Seed:         {}", seed),
            None => println!("   Seed:         random"),
        }
        println!();
        println!("   Log Level:    {}", self.logging.level);
        println!("   Log Output:   {}", self.logging.output);
        if let Some(ref log_file) = self.logging.log_file {
            println!("   Log File:     {}", log_file.display());
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AlgovizConfig::default();
        assert!(!config.visualization.record_steps);
        assert_eq!(config.visualization.max_steps, 500);
        assert_eq!(config.generator.array_size, 10);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_embedded_defaults_match() {
        let embedded: AlgovizConfig = toml::from_str(include_str!("default.toml")).unwrap();
        assert_eq!(embedded, AlgovizConfig::default());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AlgovizConfig::default();

        // 有效配置
        assert!(config.validate().is_ok());

        // 无效输出格式
        config.visualization.format = "yaml".to_string();
        assert!(config.validate().is_err());
        config.visualization.format = "json".to_string();

        // 无效日志级别
        config.logging.level = "invalid".to_string();
        assert!(config.validate().is_err());
        config.logging.level = "debug".to_string();

        // 文件输出缺少路径
        config.logging.output = "file".to_string();
        assert!(config.validate().is_err());
        config.logging.log_file = Some(PathBuf::from("algoviz.log"));
        assert!(config.validate().is_ok());

        config.generator.array_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let mut config = AlgovizConfig::default();
        config.visualization.record_steps = true;
        config.visualization.max_steps = 50;
        config.generator.seed = Some(42);

        let temp_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let path = temp_file.path().to_str().unwrap();

        // 保存
        config.save_to_file(path).unwrap();

        // 加载
        let loaded = AlgovizConfig::from_file(path).unwrap();
        assert!(loaded.visualization.record_steps);
        assert_eq!(loaded.visualization.max_steps, 50);
        assert_eq!(loaded.generator.seed, Some(42));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let loaded = AlgovizConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.generator.array_size, 10);
        assert_eq!(loaded.visualization.format, "text");
    }
}
