// Page-wide knobs. Anything a designer might want to tweak lives here.

pub const MIN_MESSAGE_LEN: usize = 20;
pub const WHEEL_THRESHOLD: f64 = 20.0;
pub const SLIDE_COOLDOWN_MS: u32 = 250;
pub const SENT_LABEL_MS: u32 = 3_000;
pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const STAR_COUNT: usize = 50;
pub const STARFIELD_DELAY_MS: u32 = 100;
pub const AUTO_SCROLL_SUPPRESS_MS: u32 = 1_200;
pub const RIPPLE_LIFETIME_MS: u32 = 600;
pub const COUNTER_DURATION_MS: f64 = 2_500.0;
pub const NOTICE_LIFETIME_MS: u32 = 4_000;

pub const DEFAULT_SUBMIT_LABEL: &str = "ENVIAR MENSAJE";

/// Sections in page order with the body theme applied while each one
/// crosses the centre of the viewport.
pub const THEME_SECTIONS: &[(&str, &str)] = &[
    ("home", "dark"),
    ("servicios", "light"),
    ("portafolio", "dark"),
    ("acerca", "light"),
    ("tecnologias", "dark"),
    ("conecta", "light"),
    ("contacto", "dark"),
];

pub fn emailjs_service_id() -> &'static str {
    option_env!("EMAILJS_SERVICE_ID").unwrap_or("service_85yozd3")
}

pub fn emailjs_template_id() -> &'static str {
    option_env!("EMAILJS_TEMPLATE_ID").unwrap_or("template_1hmuu2k")
}

pub fn emailjs_public_key() -> &'static str {
    option_env!("EMAILJS_PUBLIC_KEY").unwrap_or("86cofjmquuDaxlKS0")
}

#[cfg(debug_assertions)]
pub fn get_mail_api_url() -> &'static str {
    option_env!("EMAILJS_API_URL").unwrap_or("https://api.emailjs.com/api/v1.0/email/send")
}

#[cfg(not(debug_assertions))]
pub fn get_mail_api_url() -> &'static str {
    "https://api.emailjs.com/api/v1.0/email/send"
}
