#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use unit_converter_toolbox::{
    assistant,
    config,
    conversion::{self, Conversion, ConversionError},
    i18n,
    quantity::UnitCategory,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(900.0, 640.0))
        .with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Unit Converter & AI Assistant",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 UI를 표시하기 위해 기본 폰트를 우선 적용한다.
/// 1) assets/fonts/ 안의 폰트
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    for cand in ["assets/fonts/malgun.ttf", "assets/fonts/NotoSansKR.ttf"] {
        let asset_path = Path::new(cand);
        if asset_path.exists() {
            let bytes =
                fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    // 2) 시스템 폰트 탐색 (Windows 기준)
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 3) 실패: 기본 폰트 유지, 사용자 지정 안내
    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

/// 성공 배너에 쓰는 녹색 강조 색.
const SUCCESS_GREEN: egui::Color32 = egui::Color32::from_rgb(0x4c, 0xaf, 0x50);

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    window_alpha: f32,
    // 단위 변환
    conv_value: f64,
    conv_category: UnitCategory,
    conv_from: String,
    conv_to: String,
    conv_result: Option<Result<Conversion, ConversionError>>,
    // AI 어시스턴트
    ask_input: String,
    ask_notice: Option<String>,
    ask_result: Option<Result<String, assistant::AskError>>,
    ai_model_input: String,
    ai_key_env_input: String,
    ai_timeout_input: u64,
    // 설정
    ui_scale: f32,
    always_on_top: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    theme: ThemeChoice,
    custom_font_path: String,
    font_load_error: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Converter,
    Assistant,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ThemeChoice {
    System,
    Light,
    Dark,
    Forest,
}

/// 밝은 배경에 녹색 강조를 입힌 테마.
fn forest_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::light();
    let accent = egui::Color32::from_rgb(0x41, 0x64, 0x4a);
    let accent_hover = egui::Color32::from_rgb(0x5d, 0x87, 0x36);
    v.selection.bg_fill = accent;
    v.selection.stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);
    v.hyperlink_color = accent;
    v.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, accent_hover);
    v.widgets.active.bg_fill = accent;
    v
}

fn themed_visuals(theme: ThemeChoice) -> egui::Visuals {
    match theme {
        ThemeChoice::System => egui::Visuals::default(),
        ThemeChoice::Light => egui::Visuals::light(),
        ThemeChoice::Dark => egui::Visuals::dark(),
        ThemeChoice::Forest => forest_visuals(),
    }
}

fn unit_combo(ui: &mut egui::Ui, value: &mut String, options: &[&str]) {
    egui::ComboBox::from_id_source(ui.next_auto_id())
        .selected_text(value.clone())
        .show_ui(ui, |ui| {
            for name in options {
                ui.selectable_value(value, name.to_string(), *name);
            }
        });
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let category = UnitCategory::Length;
        let (conv_from, conv_to) = category.default_units();
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        let ai_model_input = config.ai.model.clone();
        let ai_key_env_input = config.ai.api_key_env.clone();
        let ai_timeout_input = config.ai.timeout_secs;
        Self {
            config: config.clone(),
            tr,
            lang_input,
            lang_save_status: None,
            tab: Tab::Converter,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            conv_value: 1.0,
            conv_category: category,
            conv_from: conv_from.into(),
            conv_to: conv_to.into(),
            conv_result: None,
            ask_input: String::new(),
            ask_notice: None,
            ask_result: None,
            ai_model_input,
            ai_key_env_input,
            ai_timeout_input,
            ui_scale: 1.0,
            always_on_top: false,
            show_settings_modal: false,
            show_help_modal: false,
            theme: ThemeChoice::Forest,
            custom_font_path: String::new(),
            font_load_error: None,
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Converter, txt("gui.tab.converter", "Unit Converter")),
            (Tab::Assistant, txt("gui.tab.assistant", "AI Assistant")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch menu"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_converter(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.converter.heading", "Unit Converter"),
            &txt(
                "gui.converter.tip",
                "Convert a value between units of the selected category.",
            ),
        );
        label_with_tip(
            ui,
            &txt("gui.converter.card_label", "Card-style input"),
            &txt(
                "gui.converter.card_tip",
                "Enter value and select units, then run conversion.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical(|ui| {
                egui::Grid::new("conv_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        label_with_tip(
                            ui,
                            &txt("gui.converter.category.label", "Category"),
                            &txt("gui.converter.category.tip", "Select the unit category"),
                        );
                        let before = self.conv_category;
                        egui::ComboBox::from_id_source("conv_category")
                            .selected_text(self.conv_category.label())
                            .show_ui(ui, |ui| {
                                for cat in UnitCategory::ALL {
                                    ui.selectable_value(&mut self.conv_category, cat, cat.label());
                                }
                            });
                        if before != self.conv_category {
                            let (f, t) = self.conv_category.default_units();
                            self.conv_from = f.to_string();
                            self.conv_to = t.to_string();
                            self.conv_result = None;
                        }
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.converter.value", "Value"),
                            &txt("gui.converter.value_tip", "Enter the value to convert"),
                        );
                        ui.add(egui::DragValue::new(&mut self.conv_value).speed(0.1));
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.converter.from", "From unit"),
                            &txt("gui.converter.from_tip", "Current unit of the value"),
                        );
                        unit_combo(ui, &mut self.conv_from, self.conv_category.units());
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.converter.to", "To unit"),
                            &txt("gui.converter.to_tip", "Desired unit after conversion"),
                        );
                        unit_combo(ui, &mut self.conv_to, self.conv_category.units());
                        ui.end_row();
                    });
                ui.add_space(8.0);
                if ui.button(txt("gui.converter.run", "Convert")).clicked() {
                    self.conv_result = Some(conversion::convert(
                        self.conv_value,
                        self.conv_from.trim(),
                        self.conv_to.trim(),
                    ));
                }
                match &self.conv_result {
                    Some(Ok(result)) => {
                        ui.colored_label(SUCCESS_GREEN, &result.text);
                    }
                    Some(Err(e)) => {
                        ui.colored_label(
                            ui.visuals().error_fg_color,
                            format!(
                                "{}: {e}",
                                txt("gui.converter.error_prefix", "Invalid conversion")
                            ),
                        );
                    }
                    None => {}
                }
            });
        });
    }

    fn ui_assistant(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.assistant.heading", "AI Assistant"),
            &txt(
                "gui.assistant.tip",
                "Ask a free-text question; the hosted model answers.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(txt("gui.assistant.question_label", "Your question"));
                ui.add(
                    egui::TextEdit::multiline(&mut self.ask_input)
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);
                if ui.button(txt("gui.assistant.run", "Ask AI")).clicked() {
                    if self.ask_input.trim().is_empty() {
                        self.ask_notice =
                            Some(txt("gui.assistant.empty_question", "Please enter a question."));
                        self.ask_result = None;
                    } else {
                        // 응답이 올 때까지 블로킹된다. 호출 한 번에 응답 한 번.
                        self.ask_notice = None;
                        self.ask_result =
                            Some(assistant::ask(&self.config.ai, self.ask_input.trim()));
                    }
                }
                if let Some(notice) = &self.ask_notice {
                    ui.colored_label(ui.visuals().warn_fg_color, notice);
                }
                match &self.ask_result {
                    Some(Ok(answer)) => {
                        ui.add_space(8.0);
                        ui.label(txt("gui.assistant.response_label", "AI response"));
                        egui::Frame::group(ui.style()).show(ui, |ui| {
                            ui.add(
                                egui::Label::new(egui::RichText::new(answer.as_str())).wrap(true),
                            );
                        });
                    }
                    Some(Err(e)) => {
                        ui.colored_label(
                            ui.visuals().error_fg_color,
                            format!(
                                "{}: {e}",
                                txt("gui.assistant.error_prefix", "Request failed")
                            ),
                        );
                    }
                    None => {}
                }
            });
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 테마/투명도 적용 + 라벨 복사 방지 스타일. 매 프레임 테마 기준으로
        // 다시 계산해 투명도 곱이 누적되지 않게 한다.
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        let mut visuals = themed_visuals(self.theme);
        visuals.window_fill = visuals.window_fill.linear_multiply(self.window_alpha);
        visuals.panel_fill = visuals.panel_fill.linear_multiply(self.window_alpha);
        style.visuals = visuals;
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Unit Converter & AI Assistant"));
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut new_theme = self.theme;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();
                    ui.label(txt("gui.settings.theme", "Theme"));
                    ui.horizontal(|ui| {
                        for (label, choice) in [
                            ("System", ThemeChoice::System),
                            ("Light", ThemeChoice::Light),
                            ("Dark", ThemeChoice::Dark),
                            ("Forest", ThemeChoice::Forest),
                        ] {
                            ui.selectable_value(&mut new_theme, choice, label);
                        }
                    });
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        txt("gui.settings.always_on_top", "Always on top"),
                    );
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));

                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang_auto", "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });

                    ui.separator();
                    ui.heading(txt("gui.settings.ai", "AI Assistant"));
                    ui.label(txt("gui.settings.ai_model", "Model"));
                    ui.text_edit_singleline(&mut self.ai_model_input);
                    ui.label(txt("gui.settings.ai_key_env", "API key env var"));
                    ui.text_edit_singleline(&mut self.ai_key_env_input);
                    ui.label(txt("gui.settings.ai_timeout", "Timeout (s)"));
                    ui.add(egui::DragValue::new(&mut self.ai_timeout_input).clamp_range(5..=600));

                    ui.separator();
                    ui.label(txt("gui.settings.font", "Custom font (.ttf/.ttc)"));
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.custom_font_path);
                        if ui.button(txt("gui.settings.font_pick", "Browse...")).clicked() {
                            if let Some(path) = FileDialog::new()
                                .add_filter("font", &["ttf", "ttc", "otf"])
                                .pick_file()
                            {
                                self.custom_font_path = path.display().to_string();
                            }
                        }
                        if ui.button(txt("gui.settings.font_apply", "Apply font")).clicked() {
                            self.font_load_error =
                                load_custom_font(ctx, &self.custom_font_path).err();
                        }
                    });
                    if let Some(err) = &self.font_load_error {
                        ui.colored_label(ui.visuals().error_fg_color, err);
                    }

                    ui.separator();
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        self.config.ai.model = self.ai_model_input.trim().to_string();
                        self.config.ai.api_key_env = self.ai_key_env_input.trim().to_string();
                        self.config.ai.timeout_secs = self.ai_timeout_input;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save() {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status = Some(txt("gui.settings.saved", "Saved."));
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
            if new_theme != self.theme {
                self.theme = new_theme;
            }
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Unit conversion across six categories plus a hosted AI assistant.",
                    ));
                    ui.label(txt(
                        "gui.about.units",
                        "Units are selected from a fixed catalog; temperature uses dedicated formulas.",
                    ));
                    ui.label(txt(
                        "gui.about.key_note",
                        "The AI call needs an API key in the configured environment variable.",
                    ));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.hint",
                        "Adjust language/font in settings if you see issues.",
                    ));
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(180.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Converter => self.ui_converter(ui),
                    Tab::Assistant => self.ui_assistant(ui),
                });
        });
    }
}
