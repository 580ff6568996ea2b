// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// 内置的俄语界面文案
static DEFAULT_MESSAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("not_found_title", "Страница не найдена"),
        ("not_found_text", "По этому адресу ничего нет."),
        ("server_error_title", "Ошибка сервера"),
        ("server_error_text", "Что-то пошло не так. Попробуйте позже."),
        ("course_previous", "Предыдущий курс"),
        ("course_next", "Следующий курс"),
        ("chapter_previous", "Предыдущая глава"),
        ("chapter_next", "Следующая глава"),
        ("lesson_previous", "Предыдущий урок"),
        ("lesson_next", "Следующий урок"),
        ("courses", "Курсы"),
        ("to_index", "На главную"),
        ("latest_articles", "Новые статьи"),
        ("all_articles", "Все статьи"),
        ("tasks", "Задачи"),
        ("report_error", "Сообщить об ошибке"),
        ("error_kind_misprint", "Опечатка"),
        ("error_kind_unclear_condition", "Непонятное условие"),
        ("error_kind_wrong_check", "Неправильная проверка"),
        ("error_kind_other", "Другое"),
    ])
});

/// 界面文案
///
/// 配置中的 `[messages]` 表覆盖同名的内置文案
#[derive(Debug, Clone, Default)]
pub struct Messages {
    overrides: HashMap<String, String>,
}

impl Messages {
    pub fn new(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// 查找文案；既无覆盖也无内置值时返回键本身
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.overrides
            .get(key)
            .map(String::as_str)
            .or_else(|| DEFAULT_MESSAGES.get(key).copied())
            .unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins_over_default() {
        let messages = Messages::new(HashMap::from([(
            "not_found_title".to_string(),
            "Nothing here".to_string(),
        )]));

        assert_eq!(messages.get("not_found_title"), "Nothing here");
        assert_eq!(messages.get("chapter_next"), "Следующая глава");
        assert_eq!(messages.get("no_such_key"), "no_such_key");
    }
}
