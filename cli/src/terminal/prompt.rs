use console::Term;
use rimdiff_core::sources::Credentials;

/// Asks for InterMapper credentials on the terminal. The password is not
/// echoed.
pub fn credentials() -> std::io::Result<Credentials> {
    let term = Term::stderr();

    term.write_str("InterMapper username: ")?;
    let username = term.read_line()?;

    term.write_str("InterMapper password: ")?;
    let password = term.read_secure_line()?;

    Ok(Credentials {
        username: username.trim().to_string(),
        password,
    })
}
