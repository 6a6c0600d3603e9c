use std::io::{self, Write};

use crate::app::AppError;
use crate::assistant;
use crate::config::Config;
use crate::conversion;
use crate::i18n::{self, Translator};
use crate::quantity::UnitCategory;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    Assistant,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(i18n::keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(i18n::keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(i18n::keys::MAIN_MENU_ASSISTANT));
    println!("{}", tr.t(i18n::keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(i18n::keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(i18n::keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::Assistant),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(i18n::keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다. 변환 실패는 메시지만 출력하고 메뉴로 돌아간다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(i18n::keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(i18n::keys::HELP_UNIT_CONVERSION));
    println!("{}", tr.t(i18n::keys::UNIT_CONVERSION_CATEGORY_OPTIONS));
    let category = loop {
        let sel = read_line(tr.t(i18n::keys::UNIT_CONVERSION_PROMPT_CATEGORY))?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if let Some(cat) = map_category(n) {
                break cat;
            }
        }
        println!("{}", tr.t(i18n::keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    println!(
        "{} {}",
        tr.t(i18n::keys::UNIT_CONVERSION_AVAILABLE_UNITS),
        category.units().join(", ")
    );
    let value = read_f64(tr, tr.t(i18n::keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(i18n::keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(i18n::keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    match conversion::convert(value, from_unit.trim(), to_unit.trim()) {
        Ok(result) => println!("{} {}", tr.t(i18n::keys::UNIT_CONVERSION_RESULT), result.text),
        Err(e) => println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX)),
    }
    Ok(())
}

fn map_category(n: usize) -> Option<UnitCategory> {
    // 번호는 카테고리 표시 순서와 같다 (1부터).
    UnitCategory::ALL.get(n.checked_sub(1)?).copied()
}

/// AI 어시스턴트 메뉴를 처리한다. 질의 실패는 메시지만 출력한다.
pub fn handle_assistant(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(i18n::keys::ASSISTANT_HEADING));
    println!("{}", tr.t(i18n::keys::HELP_ASSISTANT));
    let question = read_line(tr.t(i18n::keys::ASSISTANT_PROMPT_QUESTION))?;
    if question.trim().is_empty() {
        println!("{}", tr.t(i18n::keys::ASSISTANT_EMPTY_QUESTION));
        return Ok(());
    }
    println!("{}", tr.t(i18n::keys::ASSISTANT_WAITING));
    match assistant::ask(&cfg.ai, question.trim()) {
        Ok(answer) => println!("{} {answer}", tr.t(i18n::keys::ASSISTANT_RESPONSE)),
        Err(e) => println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(i18n::keys::SETTINGS_HEADING));
    println!("{}", tr.t(i18n::keys::HELP_SETTINGS));
    println!(
        "{} {}",
        tr.t(i18n::keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language
    );
    println!("{}", tr.t(i18n::keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(i18n::keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.language = match sel.trim() {
        "1" => "auto".to_string(),
        "2" => "en-us".to_string(),
        "3" => "ko-kr".to_string(),
        _ => {
            println!("{}", tr.t(i18n::keys::SETTINGS_INVALID));
            cfg.language.clone()
        }
    };
    println!("{} {}", tr.t(i18n::keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(i18n::keys::ERROR_INVALID_NUMBER)),
        }
    }
}
