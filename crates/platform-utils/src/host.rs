mod os;
mod snapshot;

pub use os::OsFamily;
pub use snapshot::{
    HostEnv, PROP_EXE_PATH, PROP_OS_ARCH, PROP_OS_FAMILY, PROP_OS_NAME, PROP_PATH_SEPARATOR,
    PROP_PROJECT_BASEDIR, PROP_TEMP_DIR, PROP_USER_DESKTOP, PROP_USER_DIR, PROP_USER_HOME,
};
