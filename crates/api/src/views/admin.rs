//! Admin panel pages.

use folio_core::contact::ContactSettings;
use folio_db::models::contact_link::ContactLink;
use folio_db::models::portfolio::PortfolioItem;
use folio_db::models::service::Service;
use folio_db::models::user::UserSummary;

use super::{document, escape, flash_banner, format_timestamp, text_area, text_input};
use crate::flash::Flash;
use crate::session::SessionUser;

const ADMIN_NAV: [(&str, &str); 5] = [
    ("/admin/dashboard", "Dashboard"),
    ("/admin/services", "Services"),
    ("/admin/portfolio", "Portfolio"),
    ("/admin/settings", "Settings"),
    ("/admin/users", "Users"),
];

fn admin_page(title: &str, user: &SessionUser, main: &str) -> String {
    let nav: String = ADMIN_NAV
        .iter()
        .map(|(href, label)| format!("<a href=\"{href}\">{label}</a>"))
        .collect();
    let body = format!(
        "<header class=\"admin-header\"><nav>{nav}</nav>\
         <span class=\"whoami\">Signed in as {username}</span>\
         <form method=\"post\" action=\"/admin/logout\"><button type=\"submit\">Log out</button></form>\
         </header>\n<main>{main}</main>",
        username = escape(&user.username),
    );
    document(title, "admin", &body)
}

/// Echoed value for `field`, falling back to `current`.
fn echoed<'a>(flash: Option<&'a Flash>, field: &str, current: &'a str) -> &'a str {
    flash.and_then(|f| f.form_value(field)).unwrap_or(current)
}

fn delete_button(action: &str, label: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\" class=\"inline\">\
         <button type=\"submit\" class=\"danger\">{label}</button></form>"
    )
}

pub fn login_page(error: Option<&str>) -> String {
    let error = error
        .map(|msg| format!("<div class=\"flash flash-error\" role=\"alert\">{}</div>", escape(msg)))
        .unwrap_or_default();
    let body = format!(
        "<main class=\"login\"><h1>Admin Login</h1>{error}\
         <form method=\"post\" action=\"/admin/login\">{user}{pass}\
         <button type=\"submit\">Sign in</button></form></main>",
        user = text_input("username", "Username", "text", ""),
        pass = text_input("password", "Password", "password", ""),
    );
    document("Admin Login", "admin login", &body)
}

/// Row counts shown on the dashboard.
pub struct DashboardCounts {
    pub services: i64,
    pub portfolio: i64,
    pub contact_links: i64,
    pub users: i64,
}

pub fn dashboard_page(user: &SessionUser, counts: &DashboardCounts) -> String {
    let main = format!(
        "<h1>Admin Dashboard</h1><p>Welcome back, {username}.</p>\
         <ul class=\"stats\">\
         <li><a href=\"/admin/services\">{services} services</a></li>\
         <li><a href=\"/admin/portfolio\">{portfolio} portfolio items</a></li>\
         <li><a href=\"/admin/settings#custom-links\">{links} contact links</a></li>\
         <li><a href=\"/admin/users\">{users} admin users</a></li></ul>",
        username = escape(&user.username),
        services = counts.services,
        portfolio = counts.portfolio,
        links = counts.contact_links,
        users = counts.users,
    );
    admin_page("Admin Dashboard", user, &main)
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

fn service_fields(flash: Option<&Flash>, name: &str, description: &str) -> String {
    format!(
        "{}{}",
        text_input("name", "Name", "text", echoed(flash, "name", name)),
        text_area("description", "Description", echoed(flash, "description", description)),
    )
}

pub fn services_page(user: &SessionUser, services: &[Service], flash: Option<&Flash>) -> String {
    let rows: String = services
        .iter()
        .map(|s| {
            format!(
                "<tr><td>{name}</td><td>{desc}</td><td>{updated}</td><td>\
                 <a href=\"/admin/services/{id}/edit\">Edit</a>{delete}</td></tr>",
                id = s.id,
                name = escape(&s.name),
                desc = escape(&s.description),
                updated = format_timestamp(&s.updated_at),
                delete = delete_button(&format!("/admin/services/{}/delete", s.id), "Delete"),
            )
        })
        .collect();

    let main = format!(
        "<h1>Services Management</h1>{flash_html}\
         <form method=\"post\" action=\"/admin/services\" class=\"panel\"><h2>Add service</h2>\
         {fields}<button type=\"submit\">Create</button></form>\
         <table class=\"listing\"><thead><tr><th>Name</th><th>Description</th><th>Updated</th>\
         <th></th></tr></thead><tbody>{rows}</tbody></table>",
        flash_html = flash_banner(flash),
        fields = service_fields(flash, "", ""),
    );
    admin_page("Services Management", user, &main)
}

pub fn service_edit_page(user: &SessionUser, service: &Service, flash: Option<&Flash>) -> String {
    let main = format!(
        "<h1>Edit service</h1>{flash_html}\
         <form method=\"post\" action=\"/admin/services/{id}\" class=\"panel\">\
         {fields}<button type=\"submit\">Save</button> <a href=\"/admin/services\">Cancel</a></form>",
        id = service.id,
        flash_html = flash_banner(flash),
        fields = service_fields(flash, &service.name, &service.description),
    );
    admin_page("Edit service", user, &main)
}

// ---------------------------------------------------------------------------
// Portfolio
// ---------------------------------------------------------------------------

fn portfolio_fields(flash: Option<&Flash>, title: &str, description: &str, image: &str) -> String {
    format!(
        "{}{}{}",
        text_input("title", "Title", "text", echoed(flash, "title", title)),
        text_area("description", "Description", echoed(flash, "description", description)),
        text_input("image", "Image (path or URL)", "text", echoed(flash, "image", image)),
    )
}

pub fn portfolio_page(user: &SessionUser, items: &[PortfolioItem], flash: Option<&Flash>) -> String {
    let rows: String = items
        .iter()
        .map(|item| {
            format!(
                "<tr><td><img src=\"{img}\" alt=\"\" class=\"thumb\"></td><td>{title}</td>\
                 <td>{desc}</td><td>{updated}</td><td>\
                 <a href=\"/admin/portfolio/{id}/edit\">Edit</a>{delete}</td></tr>",
                id = item.id,
                img = escape(&item.image),
                title = escape(&item.title),
                desc = escape(&item.description),
                updated = format_timestamp(&item.updated_at),
                delete = delete_button(&format!("/admin/portfolio/{}/delete", item.id), "Delete"),
            )
        })
        .collect();

    let main = format!(
        "<h1>Portfolio Management</h1>{flash_html}\
         <form method=\"post\" action=\"/admin/portfolio\" class=\"panel\"><h2>Add item</h2>\
         {fields}<button type=\"submit\">Create</button></form>\
         <table class=\"listing\"><thead><tr><th>Image</th><th>Title</th><th>Description</th>\
         <th>Updated</th><th></th></tr></thead><tbody>{rows}</tbody></table>",
        flash_html = flash_banner(flash),
        fields = portfolio_fields(flash, "", "", ""),
    );
    admin_page("Portfolio Management", user, &main)
}

pub fn portfolio_edit_page(
    user: &SessionUser,
    item: &PortfolioItem,
    flash: Option<&Flash>,
) -> String {
    let main = format!(
        "<h1>Edit portfolio item</h1>{flash_html}\
         <form method=\"post\" action=\"/admin/portfolio/{id}\" class=\"panel\">\
         {fields}<button type=\"submit\">Save</button> <a href=\"/admin/portfolio\">Cancel</a></form>",
        id = item.id,
        flash_html = flash_banner(flash),
        fields = portfolio_fields(flash, &item.title, &item.description, &item.image),
    );
    admin_page("Edit portfolio item", user, &main)
}

// ---------------------------------------------------------------------------
// Settings and contact links
// ---------------------------------------------------------------------------

/// Everything the settings page renders.
pub struct SettingsView<'a> {
    /// Effective settings (stored row or defaults).
    pub current: &'a ContactSettings,
    pub links: &'a [ContactLink],
    pub flash: Option<&'a Flash>,
    /// Flash carrying the rejected settings form, if any.
    pub settings_echo: Option<&'a Flash>,
    /// Flash carrying the rejected contact link form, if any.
    pub link_echo: Option<&'a Flash>,
}

pub fn settings_page(user: &SessionUser, view: &SettingsView<'_>) -> String {
    let current = view.current;
    let field = |name: &str, label: &str, kind: &str, value: Option<&str>| {
        text_input(name, label, kind, echoed(view.settings_echo, name, value.unwrap_or("")))
    };

    let settings_form = format!(
        "<form method=\"post\" action=\"/admin/settings\" class=\"panel\"><h2>Contact details</h2>\
         {email}{phone}{facebook}{linkedin}{github}{instagram}\
         <button type=\"submit\">Save settings</button></form>",
        email = field("email", "Email", "email", current.email.as_deref()),
        phone = field("phone", "Phone", "text", current.phone.as_deref()),
        facebook = field("facebook", "Facebook URL", "url", current.facebook.as_deref()),
        linkedin = field("linkedin", "LinkedIn URL", "url", current.linkedin.as_deref()),
        github = field("github", "GitHub URL", "url", current.github.as_deref()),
        instagram = field("instagram", "Instagram URL", "url", current.instagram.as_deref()),
    );

    let rows: String = view
        .links
        .iter()
        .map(|link| {
            format!(
                "<tr><td><i class=\"{icon}\"></i></td><td>{label}</td><td>{url}</td><td>{delete}</td></tr>",
                icon = escape(&link.icon),
                label = escape(&link.label),
                url = escape(&link.url),
                delete = delete_button(
                    &format!("/admin/settings/links/{}/delete", link.id),
                    "Remove"
                ),
            )
        })
        .collect();

    let link_form = format!(
        "<form method=\"post\" action=\"/admin/settings/links\" class=\"panel\">\
         <h3>Add a link</h3>{label}{url}{icon}<button type=\"submit\">Add link</button></form>",
        label = text_input("label", "Label", "text", echoed(view.link_echo, "label", "")),
        url = text_input("url", "URL", "url", echoed(view.link_echo, "url", "")),
        icon = text_input("icon", "Icon class", "text", echoed(view.link_echo, "icon", "")),
    );

    let main = format!(
        "<h1>Contact &amp; Social Settings</h1>{flash_html}{settings_form}\
         <section id=\"custom-links\"><h2>Custom contact links</h2>\
         <table class=\"listing\"><thead><tr><th>Icon</th><th>Label</th><th>URL</th><th></th></tr>\
         </thead><tbody>{rows}</tbody></table>{link_form}</section>",
        flash_html = flash_banner(view.flash),
    );
    admin_page("Contact & Social Settings", user, &main)
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

pub fn users_page(user: &SessionUser, users: &[UserSummary], flash: Option<&Flash>) -> String {
    let rows: String = users
        .iter()
        .map(|u| {
            format!(
                "<tr><td>{id}</td><td>{name}</td><td>{created}</td></tr>",
                id = u.id,
                name = escape(&u.username),
                created = format_timestamp(&u.created_at),
            )
        })
        .collect();

    let main = format!(
        "<h1>Admin Users</h1>{flash_html}\
         <form method=\"post\" action=\"/admin/users\" class=\"panel\"><h2>Add admin</h2>\
         {username}{password}<button type=\"submit\">Create user</button></form>\
         <table class=\"listing\"><thead><tr><th>ID</th><th>Username</th><th>Created</th></tr>\
         </thead><tbody>{rows}</tbody></table>",
        flash_html = flash_banner(flash),
        username = text_input("username", "Username", "text", echoed(flash, "username", "")),
        password = text_input("password", "Password", "password", ""),
    );
    admin_page("Admin Users", user, &main)
}
