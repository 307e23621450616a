//! Shared test fixtures for the engine and reconciliation tests.

pub(crate) mod helpers {
    use std::collections::HashSet;

    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone, Utc};

    use grn_core::entities::{
        Account, Chair, ChairDeclaration, ChairIdentity, Label, Project, ProjectMetadata,
        RegistryIdentity, Room, Session, Slot,
    };
    use grn_core::enums::{IssueKind, Severity};
    use grn_core::labels;
    use grn_core::resolve::{ChairResolver, ResolveError};

    /// Template sections of a fully valid submission.
    pub fn default_sections() -> Vec<(&'static str, String)> {
        vec![
            ("Session description", "Hands-on exploration of PQ handshakes.".into()),
            ("Session goal", "Agree on next steps.".into()),
            ("Additional session chairs", "_No response_".into()),
            ("Who can attend", "Anyone can attend".into()),
            ("IRC channel", "_No response_".into()),
            ("Session duration", "60 minutes".into()),
            ("Estimated number of in-person attendees", "_No response_".into()),
            ("Other sessions where we should avoid scheduling conflicts", "_No response_".into()),
            ("Meeting materials", "- Agenda: TBD\n- Minutes: TBD".into()),
            ("Comments", "_No response_".into()),
        ]
    }

    pub fn render_body(sections: &[(&str, String)]) -> String {
        sections
            .iter()
            .map(|(title, value)| format!("### {title}\n\n{value}\n"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn valid_body() -> String {
        render_body(&default_sections())
    }

    /// A valid body with one section's value replaced.
    pub fn body_with(title: &str, value: &str) -> String {
        let sections: Vec<(&str, String)> = default_sections()
            .into_iter()
            .map(|(t, v)| if t == title { (t, value.to_string()) } else { (t, v) })
            .collect();
        render_body(&sections)
    }

    pub fn session_with_body(number: u64, body: &str) -> Session {
        Session {
            id: format!("I_{number}"),
            number,
            repository: "example/sessions-123".into(),
            title: format!("Session {number}"),
            body: body.to_string(),
            labels: vec!["session".into()],
            author: Account { id: 9000 + number, login: "ada".into(), avatar_url: None },
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            room: None,
            slot: None,
        }
    }

    pub fn scheduled(mut session: Session, room: &str, slot: &str) -> Session {
        session.room = Some(room.to_string());
        session.slot = Some(slot.to_string());
        session
    }

    /// Every label the reconciler may need: the session marker, a couple of
    /// tracks, and the full severity taxonomy.
    pub fn full_catalog() -> Vec<Label> {
        let mut catalog = vec![
            Label { id: "LA_session".into(), name: labels::SESSION_MARKER.into() },
            Label { id: "LA_track_sec".into(), name: "track: security".into() },
            Label { id: "LA_track_meas".into(), name: "track: measurement".into() },
        ];
        for severity in Severity::ALL {
            for kind in IssueKind::ALL {
                let name = labels::severity_label_name(severity, kind);
                catalog.push(Label { id: format!("LA_{}_{}", severity.as_str(), kind.as_str()), name });
            }
        }
        catalog
    }

    /// Snapshot with two real rooms, one capacity-less room, two slots, and
    /// the full label catalog. Event date 2025-07-24, Madrid.
    pub fn fixture_project(sessions: Vec<Session>) -> Project {
        Project {
            metadata: ProjectMetadata {
                meeting: "IETF 123".into(),
                date: NaiveDate::from_ymd_opt(2025, 7, 24).unwrap(),
                timezone: "Europe/Madrid".into(),
            },
            rooms: vec![
                Room::from_name("Mezzanine (40)"),
                Room::from_name("Studio (15)"),
                Room::from_name("Hallway"),
            ],
            slots: vec![
                Slot::parse("9:30 - 10:30").unwrap(),
                Slot::parse("11:00 - 12:00").unwrap(),
            ],
            labels: full_catalog(),
            sessions,
        }
    }

    /// Resolver stub: every `@login` gets a platform identity; registry
    /// identities only for the logins passed to [`StubResolver::registering`].
    /// Declared bare names stay name-only.
    pub struct StubResolver {
        registered: HashSet<String>,
        fail: Option<ResolveError>,
    }

    impl StubResolver {
        pub fn registering(logins: &[&str]) -> Self {
            Self {
                registered: logins.iter().map(ToString::to_string).collect(),
                fail: None,
            }
        }

        pub fn failing(err: ResolveError) -> Self {
            Self { registered: HashSet::new(), fail: Some(err) }
        }

        fn platform_chair(&self, id: u64, login: &str) -> Chair {
            let registry = self.registered.contains(login).then(|| RegistryIdentity {
                id: id + 100_000,
                name: login.to_string(),
                email: Some(format!("{login}@example.org")),
            });
            Chair {
                identity: ChairIdentity::Platform { id, login: login.to_string(), avatar_url: None },
                registry,
            }
        }
    }

    fn stable_id(login: &str) -> u64 {
        login.bytes().map(u64::from).sum::<u64>() + 1_000
    }

    #[async_trait]
    impl ChairResolver for StubResolver {
        async fn fetch_session_chairs(
            &self,
            session: &Session,
            declared: &[ChairDeclaration],
        ) -> Result<Vec<Chair>, ResolveError> {
            if let Some(err) = &self.fail {
                return Err(err.clone());
            }
            let mut chairs = vec![self.platform_chair(session.author.id, &session.author.login)];
            for declaration in declared {
                chairs.push(match declaration {
                    ChairDeclaration::Login(login) => self.platform_chair(stable_id(login), login),
                    ChairDeclaration::Name(name) => Chair {
                        identity: ChairIdentity::Name { name: name.clone() },
                        registry: None,
                    },
                });
            }
            Ok(chairs)
        }
    }
}
