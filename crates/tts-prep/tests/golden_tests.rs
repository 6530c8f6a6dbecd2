//! Golden tests for the full preprocessing pipeline.
//!
//! A corpus of representative inputs with their exact expected spoken form,
//! plus scenarios that only pin fragments where the full output would be
//! noisy to maintain.

use tts_prep::{CodeBlockMode, IpReadMode, Pipeline, PipelineConfig, UrlDetail};

struct GoldenCase {
    input: &'static str,
    expected: &'static str,
    description: &'static str,
}

const GOLDEN: &[GoldenCase] = &[
    GoldenCase {
        input: "Вызови getUserData() через API",
        expected: "Вызови гет юзер дата открывающая скобка закрывающая скобка через эй пи ай",
        description: "camelCase, brackets, abbreviation",
    },
    GoldenCase {
        input: "Версия должна быть >= 20.10.0",
        expected: "Версия должна быть больше или равно двадцать точка десять точка ноль",
        description: "operator and version",
    },
    GoldenCase {
        input: "user@example.com",
        expected: "user собака example точка ком",
        description: "email with TLD",
    },
    GoldenCase {
        input: "3.14",
        expected: "три точка один четыре",
        description: "bare decimal reads fraction digit by digit",
    },
    GoldenCase {
        input: "50%",
        expected: "пятьдесят процентов",
        description: "percentage, genitive plural",
    },
    GoldenCase {
        input: "11%",
        expected: "одиннадцать процентов",
        description: "percentage, teens take genitive plural",
    },
    GoldenCase {
        input: "21%",
        expected: "двадцать один процент",
        description: "percentage, trailing one takes singular",
    },
    GoldenCase {
        input: "100MB",
        expected: "сто мегабайт",
        description: "size unit",
    },
    GoldenCase {
        input: "Мне 25 лет.",
        expected: "Мне двадцать пять лет.",
        description: "integer in Russian prose",
    },
    GoldenCase {
        input: "Нужно сделать pull request.",
        expected: "Нужно сделать пулл реквест.",
        description: "multi-word phrase",
    },
    GoldenCase {
        input: "Установи Docker и запусти контейнер.",
        expected: "Установи докер и запусти контейнер.",
        description: "dictionary word",
    },
    GoldenCase {
        input: "Этот API endpoint возвращает JSON.",
        expected: "Этот эй пи ай эндпоинт возвращает джейсон.",
        description: "abbreviation spelled and as-word",
    },
    GoldenCase {
        input: "Переменная my_variable содержит результат.",
        expected: "Переменная май вэриабл содержит результат.",
        description: "snake_case",
    },
    GoldenCase {
        input: "Компонент button-primary стилизован.",
        expected: "Компонент баттон праймари стилизован.",
        description: "kebab-case",
    },
    GoldenCase {
        input: "Используй стрелку -> для типов.",
        expected: "Используй стрелку стрелка для типов.",
        description: "arrow operator",
    },
    GoldenCase {
        input: "Сервер на 192.168.1.1",
        expected: "Сервер на сто девяносто два точка сто шестьдесят восемь точка один точка один",
        description: "IPv4 as whole numbers",
    },
    GoldenCase {
        input: "Дата: 15.03.2024",
        expected: "Дата: пятнадцатая марта две тысячи двадцать четыре года",
        description: "European date",
    },
    GoldenCase {
        input: "Встреча 2024-01-15",
        expected: "Встреча пятнадцатая января две тысячи двадцать четыре года",
        description: "ISO date keeps its dashes from the range pass",
    },
    GoldenCase {
        input: "Диапазон 10-20 допустим",
        expected: "Диапазон от десяти до двадцати допустим",
        description: "numeric range, genitive",
    },
    GoldenCase {
        input: "Начало в 14:30",
        expected: "Начало в четырнадцать часов тридцать минут",
        description: "time of day",
    },
    GoldenCase {
        input: "Писали на C++ и C#",
        expected: "Писали на си плюс плюс и си шарп",
        description: "compound language names survive the operator pass",
    },
    GoldenCase {
        input: "Вырос в 3,5 раза",
        expected: "Вырос в три запятая пять раза",
        description: "comma decimal keeps «запятая»",
    },
];

#[test]
fn test_golden_corpus() {
    let pipeline = Pipeline::default();

    for (i, case) in GOLDEN.iter().enumerate() {
        let result = pipeline.process(case.input);
        assert_eq!(
            result,
            case.expected,
            "\nGolden #{} FAILED: {}\nInput:    '{}'\nExpected: '{}'\nGot:      '{}'",
            i + 1,
            case.description,
            case.input,
            case.expected,
            result
        );
    }
}

#[test]
fn test_brief_code_block() {
    let config = PipelineConfig {
        code_block_mode: CodeBlockMode::Brief,
        ..PipelineConfig::default()
    };
    let pipeline = Pipeline::new(config);

    let result = pipeline.process("```python\nprint('hello')\n```");
    assert_eq!(result, "далее следует пример кода на пайтон");

    let text = "Пример кода:\n```python\ndef hello():\n    print(\"world\")\n```\nКонец примера.";
    let result = pipeline.process(text);
    assert!(result.contains("пример кода на пайтон"));
    assert!(!result.to_lowercase().contains("деф"));
}

#[test]
fn test_full_code_block() {
    let pipeline = Pipeline::default();
    let text = "Пример кода:\n```python\ndef hello():\n    print(\"world\")\n```\nКонец примера.";
    let result = pipeline.process(text).to_lowercase();
    assert!(result.contains("деф"));
    assert!(result.contains("принт"));
    assert!(result.contains("ворлд"));
}

#[test]
fn test_diagram_block_sentinel() {
    let pipeline = Pipeline::default();
    let result = pipeline.process("```mermaid\ngraph TD;\nA-->B;\n```");
    assert_eq!(result, "Тут диаграмма");
}

#[test]
fn test_inline_code() {
    let pipeline = Pipeline::default();
    assert_eq!(
        pipeline.process("Вызови `getUserData()` для получения данных."),
        "Вызови гет юзер дата для получения данных."
    );
    assert_eq!(
        pipeline.process("Установи через `pip install package`."),
        "Установи через пип инсталл пакет."
    );
}

#[test]
fn test_urls_in_text() {
    let pipeline = Pipeline::default();

    let result = pipeline.process("Документация: https://docs.python.org");
    assert_eq!(
        result,
        "Документация: эйч ти ти пи эс двоеточие слэш слэш docs точка python точка орг"
    );

    let result = pipeline.process("API доступен на http://localhost:8080/api");
    assert!(result.contains("эйч ти ти пи двоеточие слэш слэш localhost"));
    assert!(result.contains("двоеточие восемь тысяч восемьдесят"));
}

#[test]
fn test_url_detail_levels() {
    let text = "Смотри https://docs.python.org/3.11/tutorial";

    let config = PipelineConfig {
        url_detail_level: UrlDetail::DomainOnly,
        ..PipelineConfig::default()
    };
    let result = Pipeline::new(config).process(text);
    assert!(result.ends_with("docs точка python точка орг"));

    let config = PipelineConfig {
        url_detail_level: UrlDetail::Minimal,
        ..PipelineConfig::default()
    };
    let result = Pipeline::new(config).process(text);
    assert_eq!(result, "Смотри docs орг");
}

#[test]
fn test_ip_read_modes() {
    let config = PipelineConfig {
        ip_read_mode: IpReadMode::Digits,
        ..PipelineConfig::default()
    };
    let pipeline = Pipeline::new(config);
    assert_eq!(
        pipeline.process("Хост 10.0.0.1"),
        "Хост один ноль точка ноль точка ноль точка один"
    );
}

#[test]
fn test_invalid_ip_falls_through_to_numbers() {
    let pipeline = Pipeline::default();
    let result = pipeline.process("Адрес 999.1.2.3 неверен");
    // No IPv4 reading; the pieces decay to floats and integers.
    assert!(!result.contains("точка один точка"));
    assert!(result.contains("девятьсот девяносто девять"));
}

#[test]
fn test_operators_disabled() {
    let config = PipelineConfig {
        read_operators: false,
        ..PipelineConfig::default()
    };
    let pipeline = Pipeline::new(config);

    let result = pipeline.process("Проверь x -> y и z >= 10");
    assert!(!result.contains("стрелка"));
    assert!(!result.contains("больше или равно"));
    assert!(result.contains("десять"));

    // Brackets keep their spoken form even with operators off.
    let result = pipeline.process("Вызови getUserData()");
    assert!(result.contains("открывающая скобка"));
}

#[test]
fn test_file_paths_in_text() {
    let pipeline = Pipeline::default();
    let result = pipeline.process("Файл находится в /home/user/config.yaml");
    assert_eq!(
        result,
        "Файл находится в слэш home слэш user слэш config точка ямл"
    );

    let result = pipeline.process("Открой ~/Documents/report.pdf");
    assert_eq!(
        result,
        "Открой тильда слэш Documents слэш report точка пдф"
    );
}

#[test]
fn test_markdown_structure() {
    let pipeline = Pipeline::default();

    let result = pipeline.process("## Установка\n\nШаги установки");
    assert_eq!(result, "Установка\n\nШаги установки");

    let result = pipeline.process("Смотри [документацию](https://docs.example.com)");
    assert_eq!(result, "Смотри документацию");

    let result = pipeline.process("Читай [Fun with Dada](https://example.com)");
    assert_eq!(result, "Читай фун вис дада");

    let result = pipeline.process("Шаги:\n1. Установить зависимости\n2. Настроить конфиг");
    assert_eq!(
        result,
        "Шаги:\nпервое: Установить зависимости\nвторое: Настроить конфиг"
    );
}

#[test]
fn test_greek_letters_in_prose() {
    let pipeline = Pipeline::default();
    let result = pipeline.process("Функция f(α) = α² + β");
    assert!(result.contains("альфа"));
    assert!(result.contains("бета"));
    assert!(!result.contains('α'));
}

#[test]
fn test_lean_type_class_example() {
    let pipeline = Pipeline::default();
    let text = "В объявлении `Plus` — имя класса, а `plus : α → α → α` — единственный метод:\n\n```lean\nclass Plus (α : Type) where\n  plus : α → α → α\n```";
    let result = pipeline.process(text).to_lowercase();
    assert!(result.matches("альфа").count() >= 5);
    assert!(result.contains("стрелка"));
    assert!(!result.contains('α'));
}

#[test]
fn test_unknown_word_transliterated() {
    let pipeline = Pipeline::default();
    let result = pipeline.process("Сделай frobnicate дважды");
    assert!(!result.contains("frobnicate"));
    assert!(result.contains("фробникате"));
}

#[test]
fn test_complex_installation_guide() {
    let pipeline = Pipeline::default();
    let text = "## Установка Docker\n\n1. Скачай Docker Desktop с https://docker.com/download\n2. Запусти `docker --version` для проверки\n3. Версия должна быть >= 20.10.0";
    let result = pipeline.process(text).to_lowercase();
    assert!(result.contains("докер"));
    assert!(result.contains("больше или равно"));
    assert!(result.contains("двадцать точка десять точка ноль"));
    assert!(!result.contains("https"));
}

#[test]
fn test_error_message_scenario() {
    let pipeline = Pipeline::default();
    let text = "Ошибка: ConnectionRefusedError на 192.168.1.100:8080\nЛоги: /var/log/app/error.log";
    let result = pipeline.process(text).to_lowercase();
    assert!(result.contains("сто девяносто два"));
    assert!(result.contains("слэш"));
    assert!(result.contains("коннекшн"));
}
