//! Panel visibility state machine.
//!
//! States: Hidden, AdminLogin, Admin, Client. Exactly one value is current, so at
//! most one panel is ever visible. Every transition reports which list, if any,
//! has to be fetched again.

use crate::system::auth::{AdminSession, AuthError, AuthGate};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Hidden,
    AdminLogin,
    Admin,
    Client,
}

/// List refresh requested by a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refresh {
    None,
    Admin,
    Client,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewController {
    panel: Panel,
    session: Option<AdminSession>,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        panel != Panel::Hidden && self.panel == panel
    }

    pub fn is_admin_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn show_admin_login(&mut self) -> Refresh {
        self.panel = Panel::AdminLogin;
        Refresh::None
    }

    /// Admin panel if a session is open, login panel otherwise
    pub fn show_admin(&mut self) -> Refresh {
        if self.is_admin_logged_in() {
            self.panel = Panel::Admin;
            Refresh::Admin
        } else {
            self.show_admin_login()
        }
    }

    pub fn show_client(&mut self) -> Refresh {
        self.panel = Panel::Client;
        Refresh::Client
    }

    pub fn back_to_main(&mut self) -> Refresh {
        self.panel = Panel::Hidden;
        Refresh::None
    }

    pub fn logout_admin(&mut self) -> Refresh {
        self.session = None;
        self.back_to_main()
    }

    /// Check credentials against the gate; on success open the session and show the admin panel.
    /// A rejected login leaves the state untouched.
    pub fn login(
        &mut self,
        gate: &dyn AuthGate,
        username: &str,
        password: &str,
    ) -> Result<Refresh, AuthError> {
        let session = gate.login(username, password)?;
        self.session = Some(session);
        Ok(self.show_admin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::StaticCredentialGate;

    const ALL: [Panel; 3] = [Panel::AdminLogin, Panel::Admin, Panel::Client];

    fn visible_count(vc: &ViewController) -> usize {
        ALL.iter().filter(|p| vc.is_visible(**p)).count()
    }

    #[test]
    fn test_initial_state_is_hidden() {
        let vc = ViewController::new();
        assert_eq!(vc.panel(), Panel::Hidden);
        assert_eq!(visible_count(&vc), 0);
        assert!(!vc.is_admin_logged_in());
    }

    #[test]
    fn test_show_admin_without_session_falls_back_to_login() {
        let mut vc = ViewController::new();
        assert_eq!(vc.show_admin(), Refresh::None);
        assert_eq!(vc.panel(), Panel::AdminLogin);
    }

    #[test]
    fn test_login_opens_admin_panel() {
        let mut vc = ViewController::new();
        vc.show_admin_login();

        let refresh = vc
            .login(&StaticCredentialGate::default(), "admin", "admin123")
            .unwrap();
        assert_eq!(refresh, Refresh::Admin);
        assert!(vc.is_admin_logged_in());
        assert_eq!(vc.panel(), Panel::Admin);
        assert_eq!(visible_count(&vc), 1);
    }

    #[test]
    fn test_rejected_login_changes_nothing() {
        let mut vc = ViewController::new();
        vc.show_admin_login();
        let before = vc.clone();

        let err = vc
            .login(&StaticCredentialGate::default(), "admin", "wrong")
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(vc, before);
        assert!(!vc.is_admin_logged_in());
    }

    #[test]
    fn test_show_client_requests_client_refresh() {
        let mut vc = ViewController::new();
        assert_eq!(vc.show_client(), Refresh::Client);
        assert!(vc.is_visible(Panel::Client));
        assert_eq!(visible_count(&vc), 1);
    }

    #[test]
    fn test_logout_from_every_state() {
        let gate = StaticCredentialGate::default();
        type Nav = fn(&mut ViewController) -> Refresh;
        let navs: [Nav; 4] = [
            ViewController::show_admin_login,
            ViewController::show_admin,
            ViewController::show_client,
            ViewController::back_to_main,
        ];
        for nav in navs {
            let mut vc = ViewController::new();
            vc.login(&gate, "admin", "admin123").unwrap();
            nav(&mut vc);

            assert_eq!(vc.logout_admin(), Refresh::None);
            assert_eq!(vc.panel(), Panel::Hidden);
            assert!(!vc.is_admin_logged_in());
            assert_eq!(visible_count(&vc), 0);
        }
    }

    #[test]
    fn test_session_survives_navigation() {
        let mut vc = ViewController::new();
        vc.login(&StaticCredentialGate::default(), "admin", "admin123")
            .unwrap();
        vc.show_client();
        vc.back_to_main();
        assert_eq!(vc.show_admin(), Refresh::Admin);
        assert!(vc.is_admin_logged_in());
    }
}
