//! 正则辅助
//!
//! `regex` 不支持前瞻断言，`(?![\w-])` 这类条件由调用方在闭包里检查：
//! 闭包返回 `None` 表示该位置不算命中，从下一个字符继续尝试。

use regex::{Captures, Regex};

/// 判断 `pos` 处的字符是否为 ASCII 单词字符或连字符
pub(crate) fn followed_by_word_or_hyphen(haystack: &str, pos: usize) -> bool {
    haystack[pos..]
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// 带条件的全局替换
///
/// `rewrite` 返回 `(实际消费到的结束位置, 替换文本)`，结束位置允许短于整体匹配，
/// 这样可以模拟回溯到较短数字的行为。
pub(crate) fn replace_guarded<F>(re: &Regex, haystack: &str, mut rewrite: F) -> String
where
    F: FnMut(&Captures<'_>) -> Option<(usize, String)>,
{
    let mut out = String::with_capacity(haystack.len());
    let mut copied = 0;
    let mut search = 0;

    while search <= haystack.len() {
        let Some(caps) = re.captures_at(haystack, search) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        match rewrite(&caps) {
            Some((end, replacement)) if end > whole.start() => {
                out.push_str(&haystack[copied..whole.start()]);
                out.push_str(&replacement);
                copied = end;
                search = end;
            }
            _ => {
                search = next_char_boundary(haystack, whole.start());
            }
        }
    }

    out.push_str(&haystack[copied..]);
    out
}

/// 数字捕获：整数部分 + 可选小数部分
///
/// 若整体后面紧跟单词字符或连字符，回退到只取整数部分（此时后面是 `.`，满足条件）；
/// 没有小数部分则不算命中。返回 `(结束位置, 数字文本)`。
pub(crate) fn guarded_number<'h>(
    haystack: &'h str,
    caps: &Captures<'h>,
    int_group: usize,
    frac_group: usize,
) -> Option<(usize, &'h str)> {
    let int = caps.get(int_group)?;
    let frac = caps.get(frac_group);
    let full_end = frac.map_or(int.end(), |m| m.end());

    if !followed_by_word_or_hyphen(haystack, full_end) {
        return Some((full_end, &haystack[int.start()..full_end]));
    }

    frac.map(|_| (int.end(), int.as_str()))
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map_or(s.len() + 1, |c| pos + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_followed_by() {
        assert!(followed_by_word_or_hyphen("ab", 1));
        assert!(followed_by_word_or_hyphen("a-", 1));
        assert!(!followed_by_word_or_hyphen("a ", 1));
        assert!(!followed_by_word_or_hyphen("a", 1));
        assert!(!followed_by_word_or_hyphen("a.", 1));
    }

    #[test]
    fn test_replace_guarded_retries_next_position() {
        let re = Regex::new("aa").unwrap();
        // 第一次命中被拒绝后从下一个字符重新匹配
        let mut calls = 0;
        let out = replace_guarded(&re, "aaa", |caps| {
            calls += 1;
            let m = caps.get(0)?;
            (calls > 1).then(|| (m.end(), "X".to_string()))
        });
        assert_eq!(out, "aX");
    }

    #[test]
    fn test_guarded_number_backtracks_to_integer() {
        let re = Regex::new(r"n-([0-9]+)(\.[0-9]+)?").unwrap();
        let hay = "n-1.5x";
        let caps = re.captures(hay).unwrap();
        assert_eq!(guarded_number(hay, &caps, 1, 2), Some((3, "1")));

        let hay = "n-1.5";
        let caps = re.captures(hay).unwrap();
        assert_eq!(guarded_number(hay, &caps, 1, 2), Some((5, "1.5")));

        let hay = "n-12a";
        let caps = re.captures(hay).unwrap();
        assert_eq!(guarded_number(hay, &caps, 1, 2), None);
    }
}
