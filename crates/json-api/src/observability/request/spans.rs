//! Route templates for request spans.

use uuid::Uuid;

/// Replace path parameters with their route placeholders so spans from the
/// same route group together.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut template = String::new();
    let mut previous = "";

    for segment in path.trim_start_matches('/').split('/') {
        template.push('/');

        if Uuid::parse_str(segment).is_ok() {
            template.push_str("{id}");
        } else if previous == "search" {
            template.push_str("{companyCode}");
        } else {
            template.push_str(segment);
        }

        previous = segment;
    }

    template
}
