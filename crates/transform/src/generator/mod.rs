mod property_map;
mod uno;

pub use uno::UnoClassGenerator;

/// 基础原子类生成器
///
/// 输入 `"<property>: <value>"` 形式的单条声明和 rem 开关，
/// 返回按优先级排列的候选类名（可能为空）。流水线只使用第一个候选。
pub trait ClassGenerator: Send + Sync {
    fn generate(&self, declaration: &str, is_rem: bool) -> Vec<String>;

    /// 第一个候选类名，没有则为空串
    fn first_candidate(&self, declaration: &str, is_rem: bool) -> String {
        self.generate(declaration, is_rem)
            .into_iter()
            .next()
            .unwrap_or_default()
    }
}

impl<F> ClassGenerator for F
where
    F: Fn(&str, bool) -> Vec<String> + Send + Sync,
{
    fn generate(&self, declaration: &str, is_rem: bool) -> Vec<String> {
        self(declaration, is_rem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_generator() {
        let generator = |decl: &str, _is_rem: bool| vec![decl.replace(": ", "-"), "second".to_string()];
        assert_eq!(generator.first_candidate("w: 1", false), "w-1");
    }

    #[test]
    fn test_first_candidate_empty() {
        let generator = |_: &str, _: bool| Vec::<String>::new();
        assert_eq!(generator.first_candidate("color: red", false), "");
    }
}
