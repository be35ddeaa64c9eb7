//! CLI интерфейс для RustLex
//!
//! Предоставляет командную строку для токенизации SQL текста,
//! выбора диалекта и настройки языка интерфейса

use crate::common::{set_language, t, t_with_params, I18nManager, Language, LexerConfig, MessageKey, I18N};
use crate::lexer::{Dialect, Lexer, Token};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// RustLex - SQL токенизатор с поддержкой диалектов на Rust
#[derive(Parser)]
#[command(name = "rustlex")]
#[command(about = "RustLex - A SQL dialect-aware tokenizer in Rust")]
#[command(version)]
pub struct Cli {
    /// Язык интерфейса (en, ru)
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// SQL диалект (common, bigquery)
    #[arg(short, long, value_name = "DIALECT")]
    pub dialect: Option<String>,

    /// Формат вывода (plain, json)
    #[arg(short, long, value_name = "FORMAT", default_value = "plain")]
    pub format: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Токенизировать SQL текст из аргумента
    Tokenize {
        /// SQL текст
        sql: String,
    },

    /// Токенизировать SQL текст из файла
    File {
        /// Путь к файлу с SQL текстом
        path: PathBuf,
    },

    /// Показать поддерживаемые диалекты
    Dialects,

    /// Показать информацию о системе
    Info,
}

impl Cli {
    /// Инициализирует CLI с учетом настроек языка
    pub fn init() -> Self {
        let cli = Self::parse();

        // Устанавливаем язык из аргументов командной строки
        if let Some(lang_str) = &cli.language {
            if let Ok(language) = lang_str.parse::<Language>() {
                let _ = set_language(language);
            }
        }

        cli
    }

    /// Загружает конфигурацию: файл, переменные окружения, аргументы
    pub fn load_config(&self) -> anyhow::Result<LexerConfig> {
        let mut config = if let Some(config_path) = &self.config {
            LexerConfig::from_file(config_path)
                .map_err(|e| anyhow::anyhow!("{}", e))
                .with_context(|| format!("failed to load config from {:?}", config_path))?
        } else {
            // Пытаемся загрузить из rustlex.toml, иначе значения по умолчанию
            LexerConfig::from_file(&PathBuf::from("rustlex.toml"))
                .unwrap_or_else(|_| LexerConfig::default())
        };

        // Переменные окружения поверх файла
        if let Ok(env_config) = LexerConfig::from_env() {
            config = config.merge(env_config);
        }

        // Применяем настройки из командной строки
        if let Some(lang_str) = &self.language {
            let language: Language = lang_str
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            config.language = language;
            let _ = set_language(language);
        }

        if let Some(dialect_str) = &self.dialect {
            config.dialect = dialect_str.parse().map_err(|_: String| {
                anyhow::anyhow!(t_with_params(
                    MessageKey::InvalidDialect,
                    &[dialect_str.as_str()]
                ))
            })?;
        }

        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    /// Выполняет команду
    pub fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            Some(Commands::Tokenize { sql }) => self.tokenize_text(sql),
            Some(Commands::File { path }) => self.tokenize_file(path),
            Some(Commands::Dialects) => self.list_dialects(),
            Some(Commands::Info) => self.show_info(),
            None => self.show_welcome(),
        }
    }

    /// Токенизирует текст и печатает поток токенов
    fn tokenize_text(&self, sql: &str) -> anyhow::Result<()> {
        let config = self.load_config()?;
        log::debug!("{}", t(MessageKey::TokenizationStarted));

        let mut lexer = Lexer::with_dialect(sql, config.dialect)?;
        let tokens = lexer.tokenize().context(t(MessageKey::TokenizationFailed))?;

        self.print_tokens(&tokens)?;
        log::debug!(
            "{}",
            t_with_params(MessageKey::TokenizationCompleted, &[&tokens.len().to_string()])
        );
        Ok(())
    }

    /// Токенизирует содержимое файла
    fn tokenize_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        let sql = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {:?}", path))?;
        self.tokenize_text(&sql)
    }

    /// Печатает поток токенов в выбранном формате
    fn print_tokens(&self, tokens: &[Token]) -> anyhow::Result<()> {
        match self.format.as_str() {
            "json" => {
                let json = serde_json::to_string_pretty(tokens)?;
                println!("{}", json);
            }
            _ => {
                for token in tokens {
                    println!(
                        "{:>6}  {:<24} {:?}",
                        token.position.offset,
                        token.token_type.tag(),
                        token.value
                    );
                }
            }
        }
        Ok(())
    }

    /// Показывает поддерживаемые диалекты
    fn list_dialects(&self) -> anyhow::Result<()> {
        println!("{}:", t(MessageKey::SupportedDialects));
        for dialect in Dialect::all() {
            println!("  {}", dialect);
        }
        Ok(())
    }

    /// Показывает информацию о системе
    fn show_info(&self) -> anyhow::Result<()> {
        println!("RustLex {}", env!("CARGO_PKG_VERSION"));
        println!("{}: {}", t(MessageKey::Success), I18N.get_language().map_err(|e| anyhow::anyhow!(e))?);
        println!("OS: {}", std::env::consts::OS);
        println!("Arch: {}", std::env::consts::ARCH);

        for lang in I18nManager::supported_languages() {
            println!("  {}", lang);
        }

        Ok(())
    }

    /// Показывает приветствие
    fn show_welcome(&self) -> anyhow::Result<()> {
        println!("{}", t(MessageKey::Welcome));
        println!("rustlex --help");
        Ok(())
    }
}
