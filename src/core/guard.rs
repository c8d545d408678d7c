//! Query guard: every statement is checked before it reaches the store.
//!
//! Accepted statements are a single `SELECT`, free of write/DDL keywords,
//! with an outer `LIMIT` of at most [`ROW_CAP`] rows. String literals and
//! comments are blanked out first, so a title such as `'Drop-in class'`
//! does not trip the keyword check.

use crate::core::predicate::ROW_CAP;
use crate::errors::{AppError, AppResult};

const FORBIDDEN: &[&str] = &[
    "INSERT", "UPDATE", "DELETE", "DROP", "ALTER", "CREATE", "REPLACE", "TRUNCATE", "ATTACH",
    "DETACH", "PRAGMA", "GRANT", "REVOKE", "INTO", "VACUUM", "REINDEX",
];

pub fn validate(sql: &str) -> AppResult<()> {
    let code = blank_literals_and_comments(sql);
    let body = code.trim().trim_end_matches(';').trim();

    if body.contains(';') {
        return Err(AppError::UnsafeQuery("multiple statements".into()));
    }

    let tokens = tokenize(body);

    match tokens.first() {
        Some(t) if t == "SELECT" => {}
        _ => {
            return Err(AppError::UnsafeQuery(
                "only SELECT statements are allowed".into(),
            ));
        }
    }

    if let Some(word) = tokens.iter().find(|t| FORBIDDEN.contains(&t.as_str())) {
        return Err(AppError::UnsafeQuery(format!("keyword {} not allowed", word)));
    }

    let limit = outer_limit(&tokens)?;
    if limit > ROW_CAP as u64 {
        return Err(AppError::UnsafeQuery(format!(
            "LIMIT {} exceeds {}",
            limit, ROW_CAP
        )));
    }

    Ok(())
}

/// Row count of the outer `LIMIT` clause. Only `LIMIT n`, `LIMIT off, n`
/// and `LIMIT n OFFSET m` with plain integers are accepted, and the clause
/// must end the statement. A `LIMIT` inside parentheses belongs to a
/// subquery and does not bound the result.
fn outer_limit(tokens: &[String]) -> AppResult<u64> {
    let mut depth = 0i32;
    let mut pos = None;
    for (i, t) in tokens.iter().enumerate() {
        match t.as_str() {
            "(" => depth += 1,
            ")" => depth -= 1,
            "LIMIT" if depth == 0 => pos = Some(i),
            _ => {}
        }
    }

    let pos =
        pos.ok_or_else(|| AppError::UnsafeQuery(format!("missing outer LIMIT {}", ROW_CAP)))?;

    let int = |t: &String| -> Option<u64> {
        if t.chars().all(|c| c.is_ascii_digit()) {
            t.parse().ok()
        } else {
            None
        }
    };

    let count = match &tokens[pos + 1..] {
        [n] => int(n),
        [n, kw, m] if kw == "OFFSET" => int(m).and(int(n)),
        [off, comma, n] if comma == "," => int(off).and(int(n)),
        _ => None,
    };

    count.ok_or_else(|| AppError::UnsafeQuery("LIMIT must be a plain row count".into()))
}

/// Upper-cased words and numbers; every other non-blank character is a
/// token of its own (`(`, `,`, `-`, `+`, ...).
fn tokenize(code: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();

    for c in code.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            cur.push(c.to_ascii_uppercase());
            continue;
        }
        if !cur.is_empty() {
            out.push(std::mem::take(&mut cur));
        }
        if !c.is_whitespace() {
            out.push(c.to_string());
        }
    }
    if !cur.is_empty() {
        out.push(cur);
    }

    out
}

/// Replace quoted literals with `''` and drop `--`, `#` and `/* */`
/// comments, keeping the surrounding code intact.
fn blank_literals_and_comments(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' | '`' => {
                let quote = c;
                while let Some(n) = chars.next() {
                    if n == '\\' {
                        chars.next();
                    } else if n == quote {
                        // doubled quote is an escaped quote
                        if chars.peek() == Some(&quote) {
                            chars.next();
                        } else {
                            break;
                        }
                    }
                }
                // Backticks quote identifiers, which stay words.
                if quote == '`' {
                    out.push_str(" IDENT ");
                } else {
                    out.push_str("''");
                }
            }
            '-' if chars.peek() == Some(&'-') => {
                skip_line(&mut chars);
                out.push('\n');
            }
            '#' => {
                skip_line(&mut chars);
                out.push('\n');
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for n in chars.by_ref() {
                    if prev == '*' && n == '/' {
                        break;
                    }
                    prev = n;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}

fn skip_line(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    for n in chars.by_ref() {
        if n == '\n' {
            break;
        }
    }
}
