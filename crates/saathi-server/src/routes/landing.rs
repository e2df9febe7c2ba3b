//! Landing page route and HTML rendering.
//!
//! The page is assembled from the content catalogue in `saathi-core` and a
//! [`LandingView`]. Tab and FAQ clicks are plain links that carry the next
//! view state in the query string (`?feature=2&faq=1`), so the page works
//! without JavaScript.

use std::sync::Arc;

use axum::Router;
use axum::extract::Query;
use axum::response::Html;
use axum::routing::get;
use serde::Deserialize;

use saathi_core::content::{
    CONTACT_EMAILS, FAQS, FEATURES, FOOTER_LINKS, FOUNDER_NAME, FOUNDER_NOTE, FOUNDER_SIGN_OFF,
    HEADER_LINKS, PRODUCT_NAME, QUERIES_EMAIL, SCREENSHOTS, TAGLINE, WAITLIST_HEADING,
    WAITLIST_OFFER, WAITLIST_PITCH, WHY_BODY, WHY_CLOSING, WHY_HEADING,
};
use saathi_core::view::{FaqAccordion, LandingView, WaitlistForm};

use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(landing_page))
}

/// Selection carried in the query string. Unparseable values are ignored
/// rather than rejected.
#[derive(Debug, Default, Deserialize)]
struct SelectionParams {
    feature: Option<String>,
    faq: Option<String>,
}

async fn landing_page(Query(params): Query<SelectionParams>) -> Html<String> {
    let feature = params.feature.and_then(|v| v.parse().ok());
    let faq = params.faq.and_then(|v| v.parse().ok());
    Html(render_page(&LandingView::with_selection(feature, faq)))
}

/// Render the full landing page for `view`.
#[must_use]
pub fn render_page(view: &LandingView) -> String {
    let mut html = String::with_capacity(32768);
    html.push_str(LANDING_HEAD);
    html.push_str("<body>\n");
    render_header(&mut html);
    render_hero(&mut html);
    render_showcase(&mut html, view);
    render_why(&mut html);
    render_features(&mut html);
    render_waitlist(&mut html, &view.form);
    render_faq(&mut html, view);
    render_founder(&mut html);
    render_footer(&mut html);
    html.push_str("</body></html>\n");
    html
}

/// Link to the page with the given selection, jumping to `anchor`.
fn page_href(feature: usize, faq: FaqAccordion, anchor: &str) -> String {
    match faq.open_index() {
        Some(open) => format!("/?feature={feature}&amp;faq={open}#{anchor}"),
        None => format!("/?feature={feature}#{anchor}"),
    }
}

fn render_header(html: &mut String) {
    html.push_str("<header class=\"header\"><div class=\"wrap header-row\">\n");
    html.push_str(&format!(
        "  <a href=\"/\" class=\"logo\"><img src=\"/assets/logo.png\" alt=\"{PRODUCT_NAME} Logo\"/></a>\n"
    ));
    html.push_str("  <nav class=\"nav-links\">\n");
    for link in HEADER_LINKS {
        html.push_str(&format!(
            "    <a href=\"{}\">{}</a>\n",
            link.href,
            escape_html(link.label)
        ));
    }
    html.push_str("    <a href=\"#waitlist\" class=\"btn btn-primary\">Get Started</a>\n");
    html.push_str("  </nav>\n</div></header>\n");
}

fn render_hero(html: &mut String) {
    html.push_str(&format!(
        r##"<section class="hero"><div class="wrap two-col">
  <div>
    <img src="/assets/logo.png" alt="{PRODUCT_NAME}" class="hero-logo"/>
    <p class="tagline">{}</p>
    <div class="hero-actions">
      <a href="#waitlist" class="btn btn-primary">Claim Your Free 3-Month Plan</a>
      <a href="#learn-about-us" class="btn btn-outline">Learn More</a>
    </div>
  </div>
  <div><img src="/assets/landingscreen.png" alt="{PRODUCT_NAME} App" class="hero-shot"/></div>
</div></section>
"##,
        escape_html(TAGLINE)
    ));
}

fn render_showcase(html: &mut String, view: &LandingView) {
    let active = view.tabs.active();
    html.push_str("<section id=\"glimpse\" class=\"glimpse\"><div class=\"wrap\">\n");
    html.push_str("  <h2>A Glimpse Into Your <span class=\"underline\">Health</span> Journey</h2>\n");
    html.push_str("  <p class=\"lead\">See How SugarSaathi Simplifies Your Day.</p>\n");
    html.push_str("  <div class=\"two-col\">\n");
    html.push_str(&format!(
        "    <div class=\"phone\"><img src=\"/assets/{}\" alt=\"{}\"/></div>\n",
        active.asset,
        escape_html(active.alt)
    ));
    html.push_str("    <div class=\"tabs\">\n");
    for (i, shot) in SCREENSHOTS.iter().enumerate() {
        let class = if view.tabs.is_active(i) { "tab active" } else { "tab" };
        html.push_str(&format!(
            "      <a href=\"{}\" class=\"{class}\"{}><span class=\"tab-num\">{}</span><span><strong>{}</strong><small>{}</small></span></a>\n",
            page_href(i, view.faq, "glimpse"),
            if view.tabs.is_active(i) { " aria-current=\"true\"" } else { "" },
            i + 1,
            escape_html(shot.caption),
            escape_html(shot.alt),
        ));
    }
    html.push_str("    </div>\n  </div>\n</div></section>\n");
}

fn render_why(html: &mut String) {
    html.push_str(&format!(
        r#"<section id="why-sugarsaathi" class="why"><div class="wrap two-col">
  <div>
    <h2>{}</h2>
    <p>{}</p>
    <p class="closing">{}</p>
  </div>
  <div><img src="/assets/built.png" alt="Why We Built {PRODUCT_NAME}" class="rounded"/></div>
</div></section>
"#,
        escape_html(WHY_HEADING),
        escape_html(WHY_BODY),
        escape_html(WHY_CLOSING),
    ));
}

fn render_features(html: &mut String) {
    html.push_str("<section id=\"features\" class=\"features\"><div class=\"wrap\">\n");
    html.push_str("  <h2>Everything You Need for a Healthier Life</h2>\n  <div class=\"grid\">\n");
    for feature in FEATURES {
        html.push_str(&format!(
            "    <div class=\"card\"><h3>{}</h3><p>{}</p></div>\n",
            escape_html(feature.title),
            escape_html(feature.description)
        ));
    }
    html.push_str("  </div>\n</div></section>\n");
}

fn render_waitlist(html: &mut String, form: &WaitlistForm) {
    html.push_str(&format!(
        r#"<section id="waitlist" class="waitlist"><div class="wrap narrow">
  <h2>{}</h2>
  <p class="offer">{}</p>
  <p>{}</p>
  <form action="/waitlist#waitlist" method="post" class="waitlist-form">
    <input type="email" name="email" required placeholder="Your Email Here" value="{}"/>
    <button type="submit" class="btn btn-primary">Join Now</button>
  </form>
"#,
        escape_html(WAITLIST_HEADING),
        escape_html(WAITLIST_OFFER),
        escape_html(WAITLIST_PITCH),
        escape_html(&form.email),
    ));
    if let Some(message) = form.status.message() {
        let (class, role) = if form.status.is_error() {
            ("notice notice-error", "alert")
        } else {
            ("notice notice-success", "status")
        };
        html.push_str(&format!(
            "  <div class=\"{class}\" role=\"{role}\"><p>{}</p></div>\n",
            escape_html(message)
        ));
    }
    html.push_str(&format!(
        "  <p class=\"queries\">Any Queries? Write Us At: <a href=\"mailto:{QUERIES_EMAIL}\">{QUERIES_EMAIL}</a></p>\n</div></section>\n"
    ));
}

fn render_faq(html: &mut String, view: &LandingView) {
    html.push_str("<section id=\"learn-about-us\" class=\"faq\"><div class=\"wrap narrow\">\n");
    html.push_str("  <h2>Frequently Asked Questions</h2>\n");
    for (i, faq) in FAQS.iter().enumerate() {
        let open = view.faq.is_open(i);
        html.push_str(&format!(
            "  <div class=\"faq-item{}\">\n    <a href=\"{}\" class=\"faq-q\" aria-expanded=\"{open}\">{}<span class=\"chevron\">&#9660;</span></a>\n",
            if open { " open" } else { "" },
            page_href(view.tabs.active_index(), view.faq.toggled(i), "learn-about-us"),
            escape_html(faq.question),
        ));
        if open {
            html.push_str(&format!(
                "    <div class=\"faq-a\">{}</div>\n",
                escape_html(faq.answer)
            ));
        }
        html.push_str("  </div>\n");
    }
    html.push_str("</div></section>\n");
}

fn render_founder(html: &mut String) {
    html.push_str("<section class=\"founder\"><div class=\"wrap\">\n  <h2 class=\"eyebrow\">Note from Founder</h2>\n  <div class=\"two-col\">\n    <div class=\"note\">\n");
    for paragraph in FOUNDER_NOTE {
        html.push_str(&format!("      <p>{}</p>\n", escape_html(paragraph)));
    }
    html.push_str(&format!(
        "      <p class=\"sign-off\">{}</p>\n      <p class=\"signature\">{}</p>\n    </div>\n",
        escape_html(FOUNDER_SIGN_OFF),
        escape_html(FOUNDER_NAME)
    ));
    html.push_str(&format!(
        "    <div><img src=\"/assets/founder.jpg\" alt=\"{} - Founder of {PRODUCT_NAME}\" class=\"rounded\"/></div>\n  </div>\n</div></section>\n",
        escape_html(FOUNDER_NAME)
    ));
}

fn render_footer(html: &mut String) {
    html.push_str("<footer id=\"footer\" class=\"footer\"><div class=\"wrap footer-row\">\n  <div>\n");
    html.push_str(&format!(
        "    <img src=\"/assets/logo.png\" alt=\"{PRODUCT_NAME} Logo\" class=\"footer-logo\"/>\n    <div id=\"contact\"><h4>Contact Us:</h4>\n"
    ));
    for addr in CONTACT_EMAILS {
        html.push_str(&format!("      <p><a href=\"mailto:{addr}\">{addr}</a></p>\n"));
    }
    html.push_str("    </div>\n  </div>\n  <div>\n    <h4>Quick Links</h4>\n    <ul>\n");
    for link in FOOTER_LINKS {
        html.push_str(&format!(
            "      <li><a href=\"{}\">{}</a></li>\n",
            link.href,
            escape_html(link.label)
        ));
    }
    html.push_str("    </ul>\n  </div>\n</div>\n");
    html.push_str(&format!(
        "<div class=\"copyright\">{PRODUCT_NAME}. Designed with <span class=\"heart\">&hearts;</span></div>\n</footer>\n"
    ));
}

/// Escape text for use in HTML element content and quoted attributes.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Document head and stylesheet.
const LANDING_HEAD: &str = r##"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>SugarSaathi &mdash; Track less, live more.</title>
<link rel="preconnect" href="https://fonts.googleapis.com"/>
<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin/>
<link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=Manrope:wght@400;600;700&family=Playfair+Display:wght@700&display=swap" rel="stylesheet"/>
<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{--navy:#2c3e50;--red:#e74c3c;--light:#f8f9fa;--white:#fff;--blue:#1e3a8a;--serif:'Playfair Display',serif;--sans:'Manrope',sans-serif}
body{font-family:'Inter',sans-serif;background:var(--white);color:var(--navy);line-height:1.6;overflow-x:hidden}
a{color:inherit;text-decoration:none}
img{max-width:100%;display:block}
.wrap{max-width:1200px;margin:0 auto;padding:0 24px}
.narrow{max-width:860px}
.two-col{display:grid;grid-template-columns:1fr 1fr;gap:48px;align-items:center}
h2{font-family:var(--serif);font-size:44px;line-height:1.15;margin-bottom:24px}
.header{position:sticky;top:0;z-index:40;background:var(--white);border-bottom:1px solid #e5e7eb;padding:18px 0}
.header-row{display:flex;align-items:center;justify-content:space-between}
.logo img{height:36px;width:auto}
.nav-links{display:flex;align-items:center;gap:28px;font-weight:500}
.nav-links a:hover{color:var(--red)}
.btn{display:inline-flex;align-items:center;justify-content:center;padding:12px 28px;border-radius:10px;font-weight:600;font-family:var(--sans);border:2px solid transparent;cursor:pointer;transition:all .2s}
.btn-primary{background:var(--red);color:var(--white)}.btn-primary:hover{opacity:.9;color:var(--white)}
.btn-outline{border-color:var(--navy);color:var(--navy)}.btn-outline:hover{background:var(--navy);color:var(--white)}
.hero{padding:80px 0;background:linear-gradient(135deg,#FFF8F6 0%,#FFE8E4 100%)}
.hero-logo{height:72px;width:auto;margin-bottom:24px}
.tagline{font-size:26px;margin-bottom:32px}
.hero-actions{display:flex;gap:16px;flex-wrap:wrap}
.hero-shot{max-height:600px;margin:0 auto}
.glimpse{padding:96px 0;background:linear-gradient(135deg,#f8fafc 0%,#e2e8f0 100%);text-align:left}
.glimpse .underline{text-decoration:underline;text-decoration-color:var(--red);text-underline-offset:8px}
.lead{font-size:20px;margin-bottom:48px}
.phone{max-height:650px;aspect-ratio:9/19;margin:0 auto}
.phone img{width:100%;height:100%;object-fit:contain}
.tabs{display:flex;flex-direction:column;gap:16px}
.tab{display:flex;align-items:center;gap:16px;padding:22px;border-radius:16px;background:var(--white);border:2px solid transparent;font-family:var(--sans);transition:all .3s}
.tab:hover{box-shadow:0 8px 24px rgba(0,0,0,.08)}
.tab.active{background:var(--blue);color:var(--white);border-color:var(--blue);box-shadow:0 12px 32px rgba(30,58,138,.3)}
.tab-num{width:48px;height:48px;border-radius:12px;display:flex;align-items:center;justify-content:center;font-weight:700;background:#dbeafe;color:#1d4ed8;flex-shrink:0}
.tab.active .tab-num{background:rgba(255,255,255,.2);color:var(--white)}
.tab strong{display:block;font-size:18px}
.tab small{font-size:14px;opacity:.7}
.why{padding:80px 0}
.why p{font-size:20px;font-family:var(--sans);margin-bottom:16px}
.why .closing{font-family:var(--serif);font-weight:700}
.rounded{border-radius:16px;box-shadow:0 4px 12px rgba(0,0,0,.06)}
.features{padding:80px 0;background:var(--light)}
.features h2{text-align:center;margin-bottom:56px}
.grid{display:grid;grid-template-columns:repeat(3,1fr);gap:32px}
.card{background:var(--white);padding:32px;border-radius:16px;box-shadow:0 2px 8px rgba(0,0,0,.04)}
.card h3{font-family:var(--serif);font-size:20px;margin-bottom:12px}
.card p{font-family:var(--sans)}
.waitlist{padding:80px 0;background:var(--navy);color:var(--white)}
.waitlist h2{font-family:var(--sans);font-size:36px}
.offer{color:var(--red);font-weight:700;font-size:20px;margin-bottom:16px}
.waitlist-form{display:flex;gap:16px;margin:32px 0 24px;max-width:520px}
.waitlist-form input{flex:1;padding:14px 18px;border-radius:10px;border:none;font-size:16px}
.notice{margin-bottom:16px;padding:12px;border-radius:8px;font-size:14px}
.notice-success{background:#dcfce7;border:1px solid #86efac;color:#15803d}
.notice-error{background:#fee2e2;border:1px solid #fca5a5;color:#b91c1c}
.queries a{text-decoration:underline}
.faq{padding:80px 0}
.faq-item{border:1px solid #e5e7eb;border-radius:12px;margin-bottom:16px;overflow:hidden}
.faq-q{display:flex;justify-content:space-between;align-items:center;padding:20px 28px;font-weight:500;font-size:18px;font-family:var(--sans)}
.faq-item.open .faq-q{background:var(--navy);color:var(--white)}
.faq-item.open .chevron{transform:rotate(180deg)}
.chevron{margin-left:16px;transition:transform .3s}
.faq-a{padding:20px 28px;font-family:var(--sans)}
.founder{padding:80px 0;background:linear-gradient(135deg,#FFF8F6 0%,#FFE8E4 100%)}
.eyebrow{font-family:'Inter',sans-serif;font-size:18px;letter-spacing:.1em;text-transform:uppercase;margin-bottom:48px}
.note p{font-size:19px;margin-bottom:16px;text-align:justify}
.note .sign-off{font-family:var(--sans);margin-bottom:4px}
.note .signature{font-family:var(--sans);font-size:24px;color:var(--red)}
.footer{background:var(--light);border-top:1px solid #e5e7eb;padding:48px 0;margin-top:48px}
.footer-row{display:flex;justify-content:space-between;gap:48px}
.footer-logo{height:48px;width:auto;margin-bottom:16px}
.footer h4{font-size:18px;margin-bottom:8px}
.footer a:hover{text-decoration:underline}
.footer ul{list-style:none}
.copyright{border-top:1px solid #e5e7eb;margin-top:48px;padding-top:32px;text-align:center;font-size:14px}
.heart{color:var(--red)}
@media(max-width:768px){.two-col,.grid{grid-template-columns:1fr}.nav-links{display:none}h2{font-size:32px}.waitlist-form{flex-direction:column}.footer-row{flex-direction:column}}
</style></head>
"##;
