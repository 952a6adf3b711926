use axum_extra::extract::cookie::{Cookie, CookieJar};

pub const FLASH_COOKIE: &str = "dict_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// 一次性提示消息：写入 Cookie，下一次页面渲染时取出并清除
#[derive(Debug, Clone)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

pub fn set(jar: CookieJar, kind: FlashKind, message: &str) -> CookieJar {
    let kind = match kind {
        FlashKind::Success => "success",
        FlashKind::Error => "error",
    };
    // 消息可能含中文，Cookie 值必须先转义成 ASCII
    let value = format!("{}:{}", kind, urlencoding::encode(message));
    jar.add(
        Cookie::build((FLASH_COOKIE, value))
            .path("/")
            .http_only(true)
            .build(),
    )
}

pub fn take(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let flash = jar.get(FLASH_COOKIE).and_then(|cookie| parse(cookie.value()));
    if jar.get(FLASH_COOKIE).is_none() {
        return (jar, None);
    }
    let jar = jar.remove(Cookie::build((FLASH_COOKIE, "")).path("/"));
    (jar, flash)
}

fn parse(value: &str) -> Option<Flash> {
    let (kind, encoded) = value.split_once(':')?;
    let kind = match kind {
        "success" => FlashKind::Success,
        "error" => FlashKind::Error,
        _ => return None,
    };
    let message = urlencoding::decode(encoded).ok()?.into_owned();
    Some(Flash { kind, message })
}
