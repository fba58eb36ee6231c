use crate::types::CssVarUsage;

const VAR_OPEN: &str = "var(";

/// 解析值字符串中的所有 `var(...)`
///
/// 支持的格式：
/// - 无回退值：`var(--text-1)`
/// - 带回退值：`var(--text-1, #333)`
/// - 回退值内嵌函数：`var(--a, calc(1px + var(--b, 2px)))`
///
/// 括号不闭合时停止扫描，只返回之前已识别的部分。
///
/// # 示例
///
/// ```
/// use cotton_var_parse::parse_css_vars;
///
/// let usages = parse_css_vars("1px solid var(--line-line_light, #e5e5e5)");
/// assert_eq!(usages.len(), 1);
/// assert_eq!(usages[0].name, "--line-line_light");
/// assert_eq!(usages[0].fallback.as_deref(), Some("#e5e5e5"));
/// ```
pub fn parse_css_vars(value: &str) -> Vec<CssVarUsage> {
    let mut result = Vec::new();
    let mut offset = 0;

    while offset < value.len() {
        let start = match value[offset..].find(VAR_OPEN) {
            Some(pos) => offset + pos,
            None => break,
        };

        let content_start = start + VAR_OPEN.len();
        let close = match find_matching_paren(value.as_bytes(), content_start) {
            Some(close) => close,
            None => {
                tracing::warn!(value, start, "unbalanced var() expression, stop parsing");
                break;
            }
        };

        let (name, fallback) = split_var_content(&value[content_start..close]);
        let end = close + 1;

        result.push(CssVarUsage {
            name,
            fallback,
            start,
            end,
        });

        offset = end;
    }

    result
}

/// 从 `from` 开始寻找与已消费的 `(` 配对的 `)`，返回其位置
fn find_matching_paren(bytes: &[u8], from: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (i, &b) in bytes.iter().enumerate().skip(from) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// 在顶层逗号处拆分变量名和回退值
fn split_var_content(content: &str) -> (String, Option<String>) {
    let mut depth: i32 = 0;
    for (i, b) in content.bytes().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth -= 1,
            b',' if depth == 0 => {
                let name = content[..i].trim().to_string();
                let fallback = content[i + 1..].trim().to_string();
                return (name, Some(fallback));
            }
            _ => {}
        }
    }

    (content.trim().to_string(), None)
}
