/// Route for a footer link label: lower-cased, with every run of whitespace
/// and `&` collapsed into one `-`.
pub fn slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_gap = false;
    for c in label.chars() {
        if c.is_whitespace() || c == '&' {
            if !in_gap {
                out.push('-');
                in_gap = true;
            }
        } else {
            out.extend(c.to_lowercase());
            in_gap = false;
        }
    }
    out
}

pub fn link_href(label: &str) -> String {
    format!("/{}", slug(label))
}

/// Short badge text for a payment method (`"mastercard"` → `"MAST"`).
pub fn payment_badge(method: &str) -> String {
    method.chars().take(4).collect::<String>().to_uppercase()
}

pub fn copyright(year: i32, brand: &str) -> String {
    format!("© {year} {brand}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs() {
        assert_eq!(slug("Home"), "home");
        assert_eq!(slug("About Us"), "about-us");
        assert_eq!(slug("FAQ"), "faq");
        assert_eq!(slug("Returns & Refunds"), "returns-refunds");
        assert_eq!(slug("Terms & Conditions"), "terms-conditions");
        assert_eq!(slug("Shipping  Policy"), "shipping-policy");
    }

    #[test]
    fn hrefs_are_rooted() {
        assert_eq!(link_href("Privacy Policy"), "/privacy-policy");
    }

    #[test]
    fn badges() {
        let badges: Vec<_> = ["visa", "mastercard", "amex", "paypal"]
            .into_iter()
            .map(payment_badge)
            .collect();
        assert_eq!(badges, ["VISA", "MAST", "AMEX", "PAYP"]);
        assert_eq!(payment_badge("jcb"), "JCB");
    }

    #[test]
    fn copyright_line() {
        assert_eq!(
            copyright(2026, "Gadget Heaven"),
            "© 2026 Gadget Heaven. All rights reserved."
        );
    }
}
