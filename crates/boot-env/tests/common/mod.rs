use async_trait::async_trait;
use boot_env::{CommandOutcome, Platform, ProvisionContext, ScriptPath, Settings, Toolchain};
use boot_test_utils::TestProject;
use std::sync::Mutex;

/// A toolchain step as seen by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateVenv,
    Probe,
    Install,
    Sync,
    Run(String),
}

/// Records every call and answers with configured exit codes.
///
/// `create_venv` lays out a minimal venv on disk so filesystem assertions
/// behave as with the real toolchain.
pub struct FakeToolchain {
    calls: Mutex<Vec<Call>>,
    installed: Mutex<bool>,
    create_code: i32,
    manager_preinstalled: bool,
    install_code: i32,
    sync_code: i32,
    run_code: i32,
}

impl FakeToolchain {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            installed: Mutex::new(false),
            create_code: 0,
            manager_preinstalled: false,
            install_code: 0,
            sync_code: 0,
            run_code: 0,
        }
    }

    pub fn with_create_code(mut self, code: i32) -> Self {
        self.create_code = code;
        self
    }

    pub fn with_manager_preinstalled(mut self) -> Self {
        self.manager_preinstalled = true;
        self
    }

    pub fn with_install_code(mut self, code: i32) -> Self {
        self.install_code = code;
        self
    }

    pub fn with_sync_code(mut self, code: i32) -> Self {
        self.sync_code = code;
        self
    }

    pub fn with_run_code(mut self, code: i32) -> Self {
        self.run_code = code;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Toolchain for FakeToolchain {
    async fn create_venv(&self, context: &ProvisionContext) -> std::io::Result<CommandOutcome> {
        self.record(Call::CreateVenv);
        if self.create_code != 0 {
            return Ok(CommandOutcome::exited(self.create_code)
                .with_transcript("Error: Command '-m ensurepip' returned non-zero exit status 1.\n"));
        }

        let python = context.venv_executable("python").to_native();
        std::fs::create_dir_all(python.parent().unwrap())?;
        std::fs::write(&python, "")?;
        std::fs::write(context.venv_path().join("pyvenv.cfg").to_native(), "home = /usr/bin\n")?;
        Ok(CommandOutcome::exited(0).with_transcript("$ python3 -m venv .venv\n"))
    }

    async fn probe_version(&self, _context: &ProvisionContext) -> Option<String> {
        self.record(Call::Probe);
        let installed = *self.installed.lock().unwrap();
        (self.manager_preinstalled || installed).then(|| "uv 0.5.11".to_string())
    }

    async fn install(&self, _context: &ProvisionContext) -> std::io::Result<CommandOutcome> {
        self.record(Call::Install);
        if self.install_code == 0 {
            *self.installed.lock().unwrap() = true;
        }
        Ok(CommandOutcome::exited(self.install_code))
    }

    async fn sync(&self, _context: &ProvisionContext) -> std::io::Result<CommandOutcome> {
        self.record(Call::Sync);
        Ok(CommandOutcome::exited(self.sync_code))
    }

    async fn run_script(
        &self,
        _context: &ProvisionContext,
        script: &ScriptPath,
    ) -> std::io::Result<CommandOutcome> {
        self.record(Call::Run(script.relative.clone()));
        Ok(CommandOutcome::exited(self.run_code))
    }
}

pub fn linux_context(project: &TestProject) -> ProvisionContext {
    ProvisionContext::new(project.root(), Platform::Linux, Settings::default())
}
