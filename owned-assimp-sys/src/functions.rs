//! C API entry points from `cimport.h` and `version.h`

use std::os::raw::{c_char, c_int, c_uint};

use crate::constants::{aiBool, aiReturn};
use crate::scene::{aiFileIO, aiLogStream, aiMemoryInfo, aiPropertyStore, aiScene};
use crate::types::{ai_real, aiMatrix4x4, aiString};

unsafe extern "C" {
    pub fn aiImportFile(pFile: *const c_char, pFlags: c_uint) -> *const aiScene;

    pub fn aiImportFileExWithProperties(
        pFile: *const c_char,
        pFlags: c_uint,
        pFS: *mut aiFileIO,
        pProps: *const aiPropertyStore,
    ) -> *const aiScene;

    pub fn aiImportFileFromMemory(
        pBuffer: *const c_char,
        pLength: c_uint,
        pFlags: c_uint,
        pHint: *const c_char,
    ) -> *const aiScene;

    pub fn aiImportFileFromMemoryWithProperties(
        pBuffer: *const c_char,
        pLength: c_uint,
        pFlags: c_uint,
        pHint: *const c_char,
        pProps: *const aiPropertyStore,
    ) -> *const aiScene;

    pub fn aiReleaseImport(pScene: *const aiScene);

    pub fn aiGetErrorString() -> *const c_char;

    pub fn aiIsExtensionSupported(szExtension: *const c_char) -> aiBool;

    pub fn aiGetExtensionList(szOut: *mut aiString);

    pub fn aiGetMemoryRequirements(pIn: *const aiScene, in_: *mut aiMemoryInfo);

    pub fn aiCreatePropertyStore() -> *mut aiPropertyStore;

    pub fn aiReleasePropertyStore(p: *mut aiPropertyStore);

    pub fn aiSetImportPropertyInteger(
        store: *mut aiPropertyStore,
        szName: *const c_char,
        value: c_int,
    );

    pub fn aiSetImportPropertyFloat(
        store: *mut aiPropertyStore,
        szName: *const c_char,
        value: ai_real,
    );

    pub fn aiSetImportPropertyString(
        store: *mut aiPropertyStore,
        szName: *const c_char,
        st: *const aiString,
    );

    pub fn aiSetImportPropertyMatrix(
        store: *mut aiPropertyStore,
        szName: *const c_char,
        mat: *const aiMatrix4x4,
    );

    pub fn aiAttachLogStream(stream: *const aiLogStream);

    pub fn aiDetachLogStream(stream: *const aiLogStream) -> aiReturn;

    pub fn aiDetachAllLogStreams();

    pub fn aiEnableVerboseLogging(d: aiBool);

    pub fn aiGetVersionMajor() -> c_uint;

    pub fn aiGetVersionMinor() -> c_uint;

    pub fn aiGetVersionRevision() -> c_uint;

    pub fn aiGetCompileFlags() -> c_uint;
}
