//! Mail Templates
//!
//! Builders for the three messages the backend sends. Only the HTML
//! auto-reply escapes user input; plain-text bodies carry it verbatim.

use platform::html::escape_html;

use crate::domain::entities::{ContactSubmission, OutgoingMail};
use crate::domain::value_objects::SiteBranding;

/// Plain-text notification to the site owner
pub fn owner_notification(
    owner_email: &str,
    submission: &ContactSubmission,
    site: &SiteBranding,
) -> OutgoingMail {
    let subject = format!("📩 New message from {}", submission.name);
    let body = format!(
        "You received a new message from {site}:\n\n\
         👤 Name: {name}\n\
         📧 Email: {email}\n\n\
         💬 Message:\n{message}",
        site = site.name,
        name = submission.name,
        email = submission.email,
        message = submission.message,
    );
    OutgoingMail::text(owner_email, subject, body)
}

/// HTML acknowledgment sent back to the submitter
pub fn auto_reply(to: &str, submission: &ContactSubmission, site: &SiteBranding) -> OutgoingMail {
    let subject = format!("Thanks for contacting {}, {}!", site.name, submission.name);

    let site_name = escape_html(&site.name);
    let tagline = escape_html(&site.tagline);
    let url = escape_html(&site.url);
    let host = escape_html(site.display_host());
    let name = escape_html(&submission.name);
    let message = escape_html(&submission.message);

    let body = format!(
        r#"<div style="font-family: Arial, sans-serif; font-size: 15px; color: #333; background-color: #fff; border: 1px solid #eee; border-radius: 8px; padding: 20px;">
  <div style="text-align: center;">
    <h2 style="color: #ff0051; margin-bottom: 5px;">{site_name}</h2>
    <p style="font-size: 13px; color: #999; margin-top: 0;">{tagline}</p>
    <hr style="border: none; border-top: 1px solid #eee; margin: 20px 0;">
  </div>

  <p>Hi <strong>{name}</strong>,</p>

  <p>Thanks for contacting <strong>{site_name}</strong>! We’ve received your message and will get back to you soon.</p>

  <p><strong>Your message:</strong></p>
  <blockquote style="margin: 1em 0; padding: 1em; background: #fff4f8; border-left: 4px solid #ff0051; color: #222; white-space: pre-wrap;">{message}</blockquote>

  <p style="margin-top: 2em;">Cheers,<br/><strong>{site_name} Team</strong></p>

  <div style="text-align: center; margin-top: 30px;">
    <a href="{url}" style="display: inline-block; padding: 10px 20px; background-color: #ff0051; color: white; text-decoration: none; border-radius: 4px; font-weight: bold;">Visit {site_name} Website</a>
  </div>

  <hr style="border: none; border-top: 1px solid #eee; margin: 30px 0 10px;" />
  <p style="font-size: 12px; color: #999; text-align: center;">
    This is an automated message from <a href="{url}" style="color: #ff0051; text-decoration: none;">{host}</a>
  </p>
</div>
"#
    );

    OutgoingMail::html(to, subject, body)
}

/// Fixed diagnostic message for checking the mail transport by hand
pub fn test_mail(owner_email: &str, site: &SiteBranding) -> OutgoingMail {
    OutgoingMail::text(
        owner_email,
        format!("✅ Test email from {} backend", site.name),
        "This is a test email sent via the contact backend.",
    )
}
