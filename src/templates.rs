use crate::flash::{Flash, FlashKind};
use crate::models::entry::DictionaryEntry;

/// 转义用户可控文本，防止词条内容破坏页面结构
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
<meta charset="utf-8">
<title>{title} - 中英词典</title>
<style>
body {{ font-family: sans-serif; max-width: 720px; margin: 2em auto; padding: 0 1em; color: #222; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border: 1px solid #ccc; padding: .4em .6em; text-align: left; }}
form.inline {{ display: inline; }}
.msg-success {{ color: #1a7f37; }}
.msg-error {{ color: #b91c1c; }}
nav a {{ margin-right: 1em; }}
</style>
</head>
<body>
{body}
</body>
</html>"#
    )
}

fn flash_block(flash: Option<&Flash>) -> String {
    match flash {
        Some(flash) => {
            let class = match flash.kind {
                FlashKind::Success => "msg-success",
                FlashKind::Error => "msg-error",
            };
            format!(
                "<p class=\"{}\">{}</p>\n",
                class,
                escape_html(&flash.message)
            )
        }
        None => String::new(),
    }
}

fn error_block(error: Option<&str>) -> String {
    match error {
        Some(message) => format!("<p class=\"msg-error\">{}</p>\n", escape_html(message)),
        None => String::new(),
    }
}

pub fn home_page() -> String {
    layout(
        "首页",
        r#"<h1>中英词典</h1>
<p>输入中文或英文，优先查询本地词库，未收录的词条自动调用在线翻译。</p>
<input id="query" placeholder="hello / 你好">
<button onclick="doLookup()">查询</button>
<p id="result"></p>
<nav><a href="/login/">管理员登录</a><a href="/register/">注册</a></nav>
<script>
async function doLookup() {
  const query = document.getElementById('query').value;
  const resp = await fetch('/translate/', {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify({query})
  });
  const data = await resp.json();
  const el = document.getElementById('result');
  el.textContent = resp.ok
    ? data.translation + '（来源：' + (data.source === 'database' ? '本地词库' : '在线翻译') + '）'
    : data.error;
}
</script>"#,
    )
}

pub fn login_page(error: Option<&str>, flash: Option<&Flash>) -> String {
    let body = format!(
        r#"<h1>管理员登录</h1>
{}{}<form method="post" action="/login/">
<p><label>用户名 <input name="username" required></label></p>
<p><label>密码 <input name="password" type="password" required></label></p>
<p><button type="submit">登录</button></p>
</form>
<nav><a href="/">返回首页</a><a href="/register/">注册新账号</a></nav>"#,
        flash_block(flash),
        error_block(error),
    );
    layout("登录", &body)
}

pub fn register_page(error: Option<&str>) -> String {
    let body = format!(
        r#"<h1>注册</h1>
{}<form method="post" action="/register/">
<p><label>用户名 <input name="username" required></label></p>
<p><label>密码 <input name="password" type="password" required></label></p>
<p><label>确认密码 <input name="confirm_password" type="password" required></label></p>
<p><button type="submit">注册</button></p>
</form>
<nav><a href="/">返回首页</a><a href="/login/">已有账号？登录</a></nav>"#,
        error_block(error),
    );
    layout("注册", &body)
}

pub fn admin_panel_page(
    username: &str,
    entries: &[DictionaryEntry],
    flash: Option<&Flash>,
) -> String {
    let mut rows = String::new();
    for entry in entries {
        rows.push_str(&format!(
            r#"<tr>
<td>{}</td>
<td>{}</td>
<td>{}</td>
<td><form class="inline" method="post" action="/delete-entry/{}/"><button type="submit">删除</button></form></td>
</tr>
"#,
            escape_html(&entry.word),
            escape_html(&entry.translation),
            entry.updated_at.format("%Y-%m-%d %H:%M:%S"),
            entry.id,
        ));
    }

    let body = format!(
        r#"<h1>词条管理</h1>
<p>当前用户：{}　<form class="inline" method="post" action="/logout/"><button type="submit">退出登录</button></form></p>
{}<h2>新增 / 更新词条</h2>
<form method="post" action="/add-entry/">
<p><label>单词 <input name="word"></label>
<label>译文 <input name="translation"></label>
<button type="submit">保存</button></p>
</form>
<h2>词条列表</h2>
<table>
<tr><th>单词</th><th>译文</th><th>更新时间</th><th>操作</th></tr>
{}</table>"#,
        escape_html(username),
        flash_block(flash),
        rows,
    );
    layout("词条管理", &body)
}
