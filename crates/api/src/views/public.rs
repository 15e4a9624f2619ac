//! Public site pages.

use folio_core::contact::ContactSettings;
use folio_db::models::contact_link::ContactLink;
use folio_db::models::portfolio::PortfolioItem;
use folio_db::models::service::Service;

use super::{document, escape, SITE_TITLE};

const NAV: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/services", "Services"),
    ("/portfolio", "Portfolio"),
    ("/contact", "Contact"),
];

/// Contact data shown in every public page footer.
pub struct Footer<'a> {
    pub settings: &'a ContactSettings,
    pub links: &'a [ContactLink],
}

fn page(title: &str, active: &str, main: &str, footer: &Footer<'_>) -> String {
    let nav: String = NAV
        .iter()
        .map(|(href, label)| {
            let class = if *href == active { " class=\"active\"" } else { "" };
            format!("<a href=\"{href}\"{class}>{label}</a>")
        })
        .collect();

    let body = format!(
        "<header class=\"site-header\"><a class=\"brand\" href=\"/\">{brand}</a>\
         <nav>{nav}</nav></header>\n<main>{main}</main>\n{footer}",
        brand = escape(SITE_TITLE),
        footer = render_footer(footer),
    );
    document(title, "public", &body)
}

fn render_footer(footer: &Footer<'_>) -> String {
    format!(
        "<footer class=\"site-footer\">{contact}{social}{links}</footer>",
        contact = contact_details(footer.settings),
        social = social_list(footer.settings),
        links = link_list(footer.links),
    )
}

fn contact_details(settings: &ContactSettings) -> String {
    let mut out = String::from("<ul class=\"contact-details\">");
    if let Some(email) = &settings.email {
        out.push_str(&format!(
            "<li><a href=\"mailto:{e}\">{e}</a></li>",
            e = escape(email)
        ));
    }
    if let Some(phone) = &settings.phone {
        out.push_str(&format!("<li>{}</li>", escape(phone)));
    }
    out.push_str("</ul>");
    out
}

fn social_list(settings: &ContactSettings) -> String {
    let items: String = settings
        .social_links()
        .into_iter()
        .filter_map(|(name, url)| {
            url.map(|url| {
                format!(
                    "<li><a href=\"{url}\" rel=\"noopener\" target=\"_blank\" \
                     class=\"social-{name}\">{name}</a></li>",
                    url = escape(url),
                )
            })
        })
        .collect();
    format!("<ul class=\"social\">{items}</ul>")
}

fn link_list(links: &[ContactLink]) -> String {
    if links.is_empty() {
        return String::new();
    }
    let items: String = links
        .iter()
        .map(|link| {
            format!(
                "<li><a href=\"{url}\" rel=\"noopener\" target=\"_blank\">\
                 <i class=\"{icon}\"></i> {label}</a></li>",
                url = escape(&link.url),
                icon = escape(&link.icon),
                label = escape(&link.label),
            )
        })
        .collect();
    format!("<ul class=\"contact-links\">{items}</ul>")
}

fn service_cards(services: &[Service]) -> String {
    if services.is_empty() {
        return "<p class=\"empty\">Services will be listed here soon.</p>".into();
    }
    let cards: String = services
        .iter()
        .map(|s| {
            format!(
                "<article class=\"card service\"><h3>{}</h3><p>{}</p></article>",
                escape(&s.name),
                escape(&s.description)
            )
        })
        .collect();
    format!("<div class=\"grid\">{cards}</div>")
}

fn portfolio_cards(items: &[PortfolioItem]) -> String {
    if items.is_empty() {
        return "<p class=\"empty\">Portfolio items will be listed here soon.</p>".into();
    }
    let cards: String = items
        .iter()
        .map(|item| {
            format!(
                "<article class=\"card portfolio\"><img src=\"{img}\" alt=\"{title}\" loading=\"lazy\">\
                 <h3>{title}</h3><p>{desc}</p></article>",
                img = escape(&item.image),
                title = escape(&item.title),
                desc = escape(&item.description),
            )
        })
        .collect();
    format!("<div class=\"grid\">{cards}</div>")
}

pub fn home_page(services: &[Service], portfolio: &[PortfolioItem], footer: &Footer<'_>) -> String {
    let main = format!(
        "<section class=\"hero\"><h1>{title}</h1>\
         <p>Design, development and consulting.</p>\
         <a class=\"button\" href=\"/contact\">Get in touch</a></section>\
         <section id=\"services\"><h2>Services</h2>{services}</section>\
         <section id=\"portfolio\"><h2>Portfolio</h2>{portfolio}</section>",
        title = escape(SITE_TITLE),
        services = service_cards(services),
        portfolio = portfolio_cards(portfolio),
    );
    page(SITE_TITLE, "/", &main, footer)
}

pub fn about_page(footer: &Footer<'_>) -> String {
    let main = "<section><h1>About</h1>\
                <p>An independent studio building websites and web applications.</p></section>";
    page("About", "/about", main, footer)
}

pub fn services_page(services: &[Service], footer: &Footer<'_>) -> String {
    let main = format!(
        "<section><h1>Services</h1>{}</section>",
        service_cards(services)
    );
    page("Services", "/services", &main, footer)
}

pub fn portfolio_page(items: &[PortfolioItem], footer: &Footer<'_>) -> String {
    let main = format!(
        "<section><h1>Portfolio</h1>{}</section>",
        portfolio_cards(items)
    );
    page("Portfolio", "/portfolio", &main, footer)
}

pub fn contact_page(footer: &Footer<'_>) -> String {
    let main = format!(
        "<section><h1>Contact</h1>{details}{social}{links}</section>",
        details = contact_details(footer.settings),
        social = social_list(footer.settings),
        links = link_list(footer.links),
    );
    page("Contact", "/contact", &main, footer)
}

pub fn not_found_page() -> String {
    document(
        "Not Found",
        "public",
        "<main class=\"error-page\"><h1>Page not found</h1>\
         <p><a href=\"/\">Back to the home page</a></p></main>",
    )
}
