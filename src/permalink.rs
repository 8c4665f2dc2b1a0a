//! Browser permalinks into the helpdesk web UI.
//!
//! These point at the agent and customer portals, not the REST API, so they
//! are built from the bare account domain.

fn host(domain: &str) -> &str {
    let domain = domain.trim_end_matches('/');
    domain
        .strip_prefix("https://")
        .or_else(|| domain.strip_prefix("http://"))
        .unwrap_or(domain)
}

/// Agent view of a ticket.
pub fn agent_ticket_url(domain: &str, ticket_id: i64) -> String {
    format!("https://{}/a/tickets/{}", host(domain), ticket_id)
}

/// Customer portal view of a solution article.
pub fn solution_article_url(domain: &str, article_id: i64) -> String {
    format!("https://{}/support/solutions/articles/{}", host(domain), article_id)
}

/// Helpdesk download link for an attachment or avatar.
pub fn helpdesk_attachment_url(domain: &str, attachment_id: i64) -> String {
    format!("https://{}/helpdesk/attachments/{}", host(domain), attachment_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permalinks() {
        assert_eq!(
            agent_ticket_url("acme.freshdesk.com", 12),
            "https://acme.freshdesk.com/a/tickets/12"
        );
        assert_eq!(
            solution_article_url("acme.freshservice.com", 34),
            "https://acme.freshservice.com/support/solutions/articles/34"
        );
        assert_eq!(
            helpdesk_attachment_url("acme.freshdesk.com", 56),
            "https://acme.freshdesk.com/helpdesk/attachments/56"
        );
    }

    #[test]
    fn test_permalink_strips_scheme() {
        assert_eq!(
            agent_ticket_url("https://acme.freshdesk.com/", 1),
            "https://acme.freshdesk.com/a/tickets/1"
        );
    }
}
