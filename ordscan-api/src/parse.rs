//! 输入解析
//!
//! 将文本切分为元素：以空白或逗号分隔；双引号包围的片段总是文本。
//! 未加引号的片段依次尝试整数、浮点数，都失败时作为文本（如日期、版本号）。

use ordscan_config::LimitConfig;
use tracing::{debug, trace};

use crate::error::{OrdscanError, Result};
use crate::types::{Sequence, Value};

/// 原始片段
#[derive(Debug, Clone, PartialEq)]
struct Token<'a> {
    text: &'a str,
    quoted: bool,
}

/// 解析文本为序列
pub fn parse_sequence(input: &str, limits: &LimitConfig) -> Result<Sequence> {
    let tokens = tokenize(input, limits)?;
    let values = tokens.iter().map(parse_token).collect::<Vec<_>>();

    let sequence = Sequence::new(values)?;
    debug!(
        target: "ordscan::parse",
        elements = sequence.len(),
        kind = ?sequence.kind(),
        "parsed sequence"
    );
    Ok(sequence)
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

fn tokenize<'a>(input: &'a str, limits: &LimitConfig) -> Result<Vec<Token<'a>>> {
    let mut tokens = Vec::new();
    let mut rest = input;

    loop {
        rest = rest.trim_start_matches(is_separator);
        if rest.is_empty() {
            break;
        }

        let index = tokens.len();
        if index >= limits.max_elements {
            return Err(OrdscanError::LimitExceeded {
                limit: limits.max_elements,
            });
        }

        let token = if let Some(body) = rest.strip_prefix('"') {
            let close = body.find('"').ok_or_else(|| OrdscanError::Parse {
                index,
                token: truncate(rest, limits.max_token_len),
                reason: "unterminated quote".to_string(),
            })?;
            rest = &body[close + 1..];
            Token {
                text: &body[..close],
                quoted: true,
            }
        } else {
            let end = rest.find(is_separator).unwrap_or(rest.len());
            let text = &rest[..end];
            rest = &rest[end..];
            Token {
                text,
                quoted: false,
            }
        };

        if token.text.len() > limits.max_token_len {
            return Err(OrdscanError::Parse {
                index,
                token: truncate(token.text, limits.max_token_len),
                reason: format!("token longer than {} bytes", limits.max_token_len),
            });
        }

        trace!(target: "ordscan::parse", index, token = token.text, quoted = token.quoted);
        tokens.push(token);
    }

    Ok(tokens)
}

fn parse_token(token: &Token<'_>) -> Value {
    if token.quoted {
        return Value::Text(token.text.to_string());
    }

    if let Ok(i) = token.text.parse::<i64>() {
        return Value::Int(i);
    }

    // 只有含数字的片段才按浮点数解析，避免把 "nan"、"inf" 之类的单词当成数字
    if token.text.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(f) = token.text.parse::<f64>() {
            return Value::Float(f);
        }
    }

    // 日期、版本号等都按文本处理
    Value::Text(token.text.to_string())
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max.min(32)) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
