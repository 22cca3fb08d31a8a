use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use super::adapters::{LaunchAction, LaunchTarget, SharedDesktop};
use super::command::{fallback_commands, LaunchCommand};
use super::config::{load_launcher_config, LauncherConfig};
use super::factory::default_desktop;
use super::spawn::{ProcessSpawner, ProcessState, SharedSpawner};
use crate::error::UtilsError;
use crate::host::HostEnv;
use crate::settings::Settings;

/// How a spawned opener is judged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LaunchPolicy {
    /// Spawning without a launch error counts as success.
    #[default]
    Spawned,
    /// Legacy heuristic: only a process still alive at the first poll counts.
    /// An opener that hands off and exits 0 is reported as a failure.
    StillRunning,
}

impl LaunchPolicy {
    pub fn accepts(&self, state: ProcessState) -> bool {
        match (self, state) {
            (LaunchPolicy::Spawned, _) => true,
            (LaunchPolicy::StillRunning, ProcessState::Running) => true,
            (LaunchPolicy::StillRunning, ProcessState::Exited(_)) => false,
        }
    }
}

impl FromStr for LaunchPolicy {
    type Err = UtilsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "spawned" => Ok(LaunchPolicy::Spawned),
            "still-running" | "still_running" => Ok(LaunchPolicy::StillRunning),
            other => Err(UtilsError::Config(format!("unknown launch policy: {other}"))),
        }
    }
}

/// Opens files and URIs: native desktop integration first, then the
/// platform's opener commands in order.
pub struct Launcher {
    native: SharedDesktop,
    spawner: SharedSpawner,
    commands: Vec<LaunchCommand>,
    policy: LaunchPolicy,
}

impl Launcher {
    pub fn new(host: &HostEnv) -> Self {
        Self {
            native: default_desktop(),
            spawner: Arc::new(ProcessSpawner::new()),
            commands: fallback_commands(host),
            policy: LaunchPolicy::default(),
        }
    }

    /// Launcher for the live process, configured from [`Settings`].
    /// An unreadable launcher config is logged and ignored.
    pub fn system() -> Self {
        let host = HostEnv::capture();
        let settings = Settings::from_host(&host);
        let mut launcher = Self::new(&host).with_policy(settings.launch_policy);
        if let Some(path) = settings.launcher_config.as_deref() {
            match load_launcher_config(path) {
                Ok(config) => launcher = launcher.with_config(config),
                Err(error) => tracing::warn!("ignoring launcher config: {error}"),
            }
        }
        launcher
    }

    pub fn with_native(mut self, native: SharedDesktop) -> Self {
        self.native = native;
        self
    }

    pub fn with_spawner(mut self, spawner: SharedSpawner) -> Self {
        self.spawner = spawner;
        self
    }

    pub fn with_policy(mut self, policy: LaunchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_commands(mut self, commands: Vec<LaunchCommand>) -> Self {
        self.commands = commands;
        self
    }

    pub fn with_config(mut self, config: LauncherConfig) -> Self {
        if let Some(policy) = config.policy {
            self.policy = policy;
        }
        if let Some(commands) = config.commands {
            self.commands = commands;
        }
        self
    }

    pub fn commands(&self) -> &[LaunchCommand] {
        &self.commands
    }

    pub fn policy(&self) -> LaunchPolicy {
        self.policy
    }

    pub fn browse(&self, uri: &Url) -> bool {
        self.launch(LaunchAction::Browse, LaunchTarget::Uri(uri))
    }

    pub fn open(&self, path: &Path) -> bool {
        self.launch(LaunchAction::Open, LaunchTarget::Path(path))
    }

    pub fn edit(&self, path: &Path) -> bool {
        self.launch(LaunchAction::Edit, LaunchTarget::Path(path))
    }

    fn launch(&self, action: LaunchAction, target: LaunchTarget<'_>) -> bool {
        let mut already_tried = None;
        if self.native.supports(action) {
            if self.launch_native(action, target) {
                return true;
            }
            already_tried = self.native.program();
        } else {
            tracing::debug!(
                "{action} is not supported by the {} desktop integration",
                self.native.id()
            );
        }

        if self
            .commands
            .iter()
            .filter(|command| already_tried != Some(command.program.as_str()))
            .any(|command| self.run_command(command, target))
        {
            return true;
        }
        tracing::warn!("failed to {action} {target}");
        false
    }

    fn launch_native(&self, action: LaunchAction, target: LaunchTarget<'_>) -> bool {
        tracing::info!("trying native desktop {action} with {target}");
        match self.native.perform(action, target) {
            Ok(()) => true,
            Err(error) => {
                tracing::error!("error using native desktop {action}: {error}");
                false
            }
        }
    }

    fn run_command(&self, command: &LaunchCommand, target: LaunchTarget<'_>) -> bool {
        tracing::info!(
            program = %command.program,
            args = %command.args,
            %target,
            "trying to exec"
        );
        let args = command.prepare(target.as_os_str());
        match self.spawner.spawn(&command.program, &args) {
            Ok(state) => {
                let accepted = self.policy.accepts(state);
                match state {
                    ProcessState::Running => tracing::debug!("{} is running", command.program),
                    ProcessState::Exited(code) => tracing::debug!(
                        "{} exited immediately with code {code:?}",
                        command.program
                    ),
                }
                if !accepted {
                    tracing::error!(
                        "{} ended before the launch could be confirmed",
                        command.program
                    );
                }
                accepted
            }
            Err(error) => {
                tracing::error!("error running {}: {error}", command.program);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::{DesktopIntegration, Spawner, UnsupportedDesktop};
    use crate::error::UtilsResult;
    use crate::host::PROP_OS_NAME;
    use std::collections::HashMap;
    use std::ffi::OsString;
    use std::io;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSpawner {
        outcomes: HashMap<String, Result<ProcessState, io::ErrorKind>>,
        calls: Mutex<Vec<(String, Vec<OsString>)>>,
    }

    impl RecordingSpawner {
        fn with(mut self, program: &str, outcome: Result<ProcessState, io::ErrorKind>) -> Self {
            self.outcomes.insert(program.to_string(), outcome);
            self
        }

        fn programs(&self) -> Vec<String> {
            self.calls
                .lock()
                .expect("calls lock")
                .iter()
                .map(|(program, _)| program.clone())
                .collect()
        }
    }

    impl Spawner for RecordingSpawner {
        fn spawn(&self, program: &str, args: &[OsString]) -> io::Result<ProcessState> {
            self.calls
                .lock()
                .expect("calls lock")
                .push((program.to_string(), args.to_vec()));
            match self.outcomes.get(program) {
                Some(Ok(state)) => Ok(*state),
                Some(Err(kind)) => Err(io::Error::from(*kind)),
                None => Err(io::Error::from(io::ErrorKind::NotFound)),
            }
        }
    }

    struct StubDesktop {
        supported: bool,
        succeed: bool,
        program: Option<&'static str>,
        calls: Mutex<Vec<LaunchAction>>,
    }

    impl StubDesktop {
        fn new(supported: bool, succeed: bool) -> Self {
            Self {
                supported,
                succeed,
                program: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn running(mut self, program: &'static str) -> Self {
            self.program = Some(program);
            self
        }

        fn calls(&self) -> Vec<LaunchAction> {
            self.calls.lock().expect("calls lock").clone()
        }
    }

    impl DesktopIntegration for StubDesktop {
        fn id(&self) -> &str {
            "stub"
        }

        fn program(&self) -> Option<&str> {
            self.program
        }

        fn supports(&self, _action: LaunchAction) -> bool {
            self.supported
        }

        fn perform(&self, action: LaunchAction, _target: LaunchTarget<'_>) -> UtilsResult<()> {
            self.calls.lock().expect("calls lock").push(action);
            if self.succeed {
                Ok(())
            } else {
                Err(UtilsError::Internal("stub failure".to_string()))
            }
        }
    }

    fn linux_host() -> HostEnv {
        HostEnv::default()
            .with_property(PROP_OS_NAME, "Linux")
            .with_var("XDG_SESSION_ID", "3")
    }

    fn launcher(spawner: Arc<RecordingSpawner>) -> Launcher {
        Launcher::new(&linux_host())
            .with_native(Arc::new(UnsupportedDesktop::new()))
            .with_spawner(spawner)
    }

    #[test]
    fn native_success_skips_fallback() {
        let spawner = Arc::new(RecordingSpawner::default());
        let native = Arc::new(StubDesktop::new(true, true));
        let launcher = launcher(spawner.clone()).with_native(native.clone());

        assert!(launcher.edit(Path::new("/tmp/notes.txt")));
        assert_eq!(native.calls(), vec![LaunchAction::Edit]);
        assert!(spawner.programs().is_empty());
    }

    #[test]
    fn native_failure_falls_back_to_commands() {
        let spawner =
            Arc::new(RecordingSpawner::default().with("xdg-open", Ok(ProcessState::Running)));
        let native = Arc::new(StubDesktop::new(true, false));
        let launcher = launcher(spawner.clone()).with_native(native.clone());

        let uri = Url::parse("https://example.com/").expect("url");
        assert!(launcher.browse(&uri));
        assert_eq!(native.calls(), vec![LaunchAction::Browse]);
        assert_eq!(spawner.programs(), vec!["xdg-open"]);
    }

    #[test]
    fn unsupported_native_is_not_invoked() {
        let spawner =
            Arc::new(RecordingSpawner::default().with("xdg-open", Ok(ProcessState::Running)));
        let native = Arc::new(StubDesktop::new(false, true));
        let launcher = launcher(spawner.clone()).with_native(native.clone());

        assert!(launcher.open(Path::new("/tmp/report.pdf")));
        assert!(native.calls().is_empty());
    }

    #[test]
    fn failed_native_program_is_not_retried_as_fallback() {
        let spawner =
            Arc::new(RecordingSpawner::default().with("kde-open", Ok(ProcessState::Running)));
        let native = Arc::new(StubDesktop::new(true, false).running("xdg-open"));
        let launcher = launcher(spawner.clone()).with_native(native.clone());

        assert!(launcher.open(Path::new("/tmp/report.pdf")));
        assert_eq!(native.calls(), vec![LaunchAction::Open]);
        assert_eq!(spawner.programs(), vec!["kde-open"]);
    }

    #[test]
    fn unsupported_native_program_stays_in_fallback() {
        let spawner =
            Arc::new(RecordingSpawner::default().with("xdg-open", Ok(ProcessState::Running)));
        let native = Arc::new(StubDesktop::new(false, false).running("xdg-open"));
        let launcher = launcher(spawner.clone()).with_native(native.clone());

        assert!(launcher.open(Path::new("/tmp/report.pdf")));
        assert!(native.calls().is_empty());
        assert_eq!(spawner.programs(), vec!["xdg-open"]);
    }

    #[test]
    fn fallback_passes_target_as_single_argument() {
        let spawner =
            Arc::new(RecordingSpawner::default().with("xdg-open", Ok(ProcessState::Running)));
        let launcher = launcher(spawner.clone());

        let path = PathBuf::from("/tmp/with space/file.txt");
        assert!(launcher.open(&path));
        let calls = spawner.calls.lock().expect("calls lock").clone();
        assert_eq!(
            calls,
            vec![("xdg-open".to_string(), vec![OsString::from("/tmp/with space/file.txt")])]
        );
    }

    #[test]
    fn launch_errors_move_to_next_command() {
        let spawner = Arc::new(
            RecordingSpawner::default()
                .with("xdg-open", Err(io::ErrorKind::NotFound))
                .with("kde-open", Err(io::ErrorKind::PermissionDenied))
                .with("gnome-open", Ok(ProcessState::Exited(Some(0)))),
        );
        let launcher = launcher(spawner.clone());

        assert!(launcher.open(Path::new("/tmp/a.txt")));
        assert_eq!(spawner.programs(), vec!["xdg-open", "kde-open", "gnome-open"]);
    }

    #[test]
    fn spawned_policy_accepts_immediate_exit() {
        let spawner = Arc::new(
            RecordingSpawner::default().with("xdg-open", Ok(ProcessState::Exited(Some(0)))),
        );
        let launcher = launcher(spawner.clone());

        assert!(launcher.open(Path::new("/tmp/a.txt")));
        assert_eq!(spawner.programs(), vec!["xdg-open"]);
    }

    #[test]
    fn still_running_policy_rejects_exited_processes() {
        let spawner = Arc::new(
            RecordingSpawner::default()
                .with("xdg-open", Ok(ProcessState::Exited(Some(0))))
                .with("kde-open", Ok(ProcessState::Exited(Some(1))))
                .with("gnome-open", Ok(ProcessState::Running)),
        );
        let launcher = launcher(spawner.clone()).with_policy(LaunchPolicy::StillRunning);

        assert!(launcher.open(Path::new("/tmp/a.txt")));
        assert_eq!(spawner.programs(), vec!["xdg-open", "kde-open", "gnome-open"]);
    }

    #[test]
    fn all_failures_return_false() {
        let spawner = Arc::new(RecordingSpawner::default());
        let launcher = launcher(spawner.clone());

        assert!(!launcher.edit(Path::new("/tmp/a.txt")));
        assert_eq!(spawner.programs(), vec!["xdg-open", "kde-open", "gnome-open"]);
    }

    #[test]
    fn unknown_platform_without_native_fails() {
        let spawner = Arc::new(RecordingSpawner::default());
        let host = HostEnv::default().with_property(PROP_OS_NAME, "plan9");
        let launcher = Launcher::new(&host)
            .with_native(Arc::new(UnsupportedDesktop::new()))
            .with_spawner(spawner.clone());

        assert!(launcher.commands().is_empty());
        assert!(!launcher.open(Path::new("/tmp/a.txt")));
        assert!(spawner.programs().is_empty());
    }

    #[test]
    fn config_overrides_commands_and_policy() {
        let spawner = Arc::new(
            RecordingSpawner::default().with("firefox", Ok(ProcessState::Running)),
        );
        let launcher = launcher(spawner.clone()).with_config(LauncherConfig {
            policy: Some(LaunchPolicy::StillRunning),
            commands: Some(vec![LaunchCommand::with_args("firefox", "--new-tab %s")]),
        });

        assert_eq!(launcher.policy(), LaunchPolicy::StillRunning);
        let uri = Url::parse("https://example.com/a b").expect("url");
        assert!(launcher.browse(&uri));
        let calls = spawner.calls.lock().expect("calls lock").clone();
        assert_eq!(
            calls,
            vec![(
                "firefox".to_string(),
                vec![
                    OsString::from("--new-tab"),
                    OsString::from("https://example.com/a%20b"),
                ]
            )]
        );
    }

    #[test]
    fn policy_parses_from_strings() {
        assert_eq!("spawned".parse::<LaunchPolicy>().ok(), Some(LaunchPolicy::Spawned));
        assert_eq!(
            " Still-Running ".parse::<LaunchPolicy>().ok(),
            Some(LaunchPolicy::StillRunning)
        );
        assert!(matches!(
            "maybe".parse::<LaunchPolicy>(),
            Err(UtilsError::Config(_))
        ));
    }
}
