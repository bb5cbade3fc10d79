//! Test fixtures - reusable seed content.

use chrono::{DateTime, TimeZone, Utc};

/// Clock start for in-process scenarios
pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

/// Two books (one single-copy), a second copy of the other, a librarian and
/// two members
pub const LIBRARY_SEED: &str = r#"
[[books]]
id = "B001"
title = "Clean Code"
author = "Robert Martin"
isbn = "978-0132350884"

[[books]]
id = "B002"
title = "Design Patterns"
author = "Gang of Four"
isbn = "978-0201633610"

[[copies]]
id = "C001"
book = "B001"

[[copies]]
id = "C002"
book = "B002"

[[copies]]
id = "C003"
book = "B002"

[[users]]
id = "L001"
name = "Alice Admin"
email = "alice@library.com"
role = "librarian"

[[users]]
id = "M001"
name = "Bob Reader"
email = "bob@email.com"

[[users]]
id = "M002"
name = "Carol Reader"
email = "carol@email.com"

[[credentials]]
email = "alice@library.com"
password = "admin123"

[[credentials]]
email = "bob@email.com"
password = "password123"

[[credentials]]
email = "carol@email.com"
password = "carolpass"
"#;

/// Bob has held copy C002 since New Year, long past due
pub const OVERDUE_LOAN: &str = r#"
[[loans]]
id = "LN-OLD"
member = "M001"
copy = "C002"
borrowed_at = "2024-01-01T10:00:00Z"
"#;

/// `LIBRARY_SEED` with C002 on loan to Bob since New Year
pub fn overdue_seed() -> String {
    LIBRARY_SEED.replace(
        "id = \"C002\"\nbook = \"B002\"",
        "id = \"C002\"\nbook = \"B002\"\nstatus = \"borrowed\"",
    ) + OVERDUE_LOAN
}
