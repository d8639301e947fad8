//! Tests for repository-type dispatch and archive discovery.

use crate::acquisition::{
    domain::DownloaderSet,
    ports::{DownloadRequest, Downloader, DownloaderError, DownloaderResult},
    services::{AcquisitionDispatcher, AcquisitionError, collect_dependency_archives},
};
use crate::project::domain::{ProjectName, Repository, RepositoryType};
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use mockall::mock;
use rstest::{fixture, rstest};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

mock! {
    Fetcher {}

    #[async_trait]
    impl Downloader for Fetcher {
        async fn download(&self, request: &DownloadRequest) -> DownloaderResult<Utf8PathBuf>;
    }
}

/// Source tree with two archives (one nested, one upper-case) and a
/// non-archive file.
#[fixture]
fn source_tree() -> TempDir {
    let dir = TempDir::new().expect("temporary directory");
    fs::create_dir_all(dir.path().join("lib/nested")).expect("create lib");
    fs::write(dir.path().join("lib/commons-io.jar"), b"jar").expect("write jar");
    fs::write(dir.path().join("lib/nested/GUAVA.JAR"), b"jar").expect("write jar");
    fs::write(dir.path().join("README.md"), b"readme").expect("write readme");
    dir
}

fn utf8(dir: &TempDir) -> Utf8PathBuf {
    Utf8Path::from_path(dir.path())
        .expect("temporary directory is UTF-8")
        .to_owned()
}

fn name() -> ProjectName {
    ProjectName::new("sample").expect("valid name")
}

#[rstest]
fn archives_are_collected_recursively(source_tree: TempDir) {
    let root = utf8(&source_tree);

    let archives = collect_dependency_archives(&root, ".jar").expect("scan should succeed");

    assert_eq!(
        archives.into_iter().collect::<Vec<_>>(),
        vec![
            root.join("lib/commons-io.jar"),
            root.join("lib/nested/GUAVA.JAR"),
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn local_repository_is_used_in_place(source_tree: TempDir) {
    let root = utf8(&source_tree);
    let mut repository = Repository::new(RepositoryType::Local, root.as_str()).expect("valid");
    let dispatcher = AcquisitionDispatcher::new(DownloaderSet::new());

    let resolved = dispatcher
        .acquire(&name(), &mut repository, Utf8Path::new("/unused"))
        .await
        .expect("local acquisition should succeed");

    assert_eq!(resolved, root);
    assert_eq!(repository.source_directory(), Some(root.as_path()));
    assert_eq!(repository.dependency_archives().len(), 2);
}

#[rstest]
#[case(RepositoryType::Compressed)]
#[case(RepositoryType::Git)]
#[case(RepositoryType::Mercurial)]
#[case(RepositoryType::Subversion)]
#[tokio::test(flavor = "multi_thread")]
async fn missing_downloader_is_reported_as_unsupported(#[case] repository_type: RepositoryType) {
    let mut repository =
        Repository::new(repository_type, "https://example.org/repo").expect("valid");
    let dispatcher = AcquisitionDispatcher::new(DownloaderSet::new());

    let result = dispatcher
        .acquire(&name(), &mut repository, Utf8Path::new("/tmp"))
        .await;

    assert!(matches!(
        result,
        Err(AcquisitionError::UnsupportedRepositoryType(kind)) if kind == repository_type
    ));
    assert!(repository.source_directory().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remote_repository_is_fetched_by_its_downloader(source_tree: TempDir) {
    let root = utf8(&source_tree);
    let fetched = root.clone();
    let mut fetcher = MockFetcher::new();
    fetcher
        .expect_download()
        .withf(|request: &DownloadRequest| {
            request.remote_url() == "https://example.org/sample.git"
                && request.project_name().as_str() == "sample"
                && request.working_directory() == Utf8Path::new("/srv/staging")
        })
        .times(1)
        .returning(move |_| Ok(fetched.clone()));
    let dispatcher =
        AcquisitionDispatcher::new(DownloaderSet::new().with_git(Arc::new(fetcher)));
    let mut repository =
        Repository::new(RepositoryType::Git, "https://example.org/sample.git").expect("valid");

    let resolved = dispatcher
        .acquire(&name(), &mut repository, Utf8Path::new("/srv/staging"))
        .await
        .expect("acquisition should succeed");

    assert_eq!(resolved, root);
    assert_eq!(repository.dependency_archives().len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn downloader_failures_propagate() {
    let mut fetcher = MockFetcher::new();
    fetcher.expect_download().times(1).returning(|_| {
        Err(DownloaderError::transport(std::io::Error::other(
            "connection reset",
        )))
    });
    let dispatcher =
        AcquisitionDispatcher::new(DownloaderSet::new().with_mercurial(Arc::new(fetcher)));
    let mut repository =
        Repository::new(RepositoryType::Mercurial, "https://example.org/hg").expect("valid");

    let result = dispatcher
        .acquire(&name(), &mut repository, Utf8Path::new("/tmp"))
        .await;

    assert!(matches!(
        result,
        Err(AcquisitionError::Download {
            repository_type: RepositoryType::Mercurial,
            ..
        })
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_local_directory_fails_the_scan() {
    let missing = TempDir::new().expect("temporary directory");
    let path = utf8(&missing).join("does-not-exist");
    let mut repository = Repository::new(RepositoryType::Local, path.as_str()).expect("valid");
    let dispatcher = AcquisitionDispatcher::new(DownloaderSet::new());

    let result = dispatcher
        .acquire(&name(), &mut repository, Utf8Path::new("/tmp"))
        .await;

    assert!(matches!(result, Err(AcquisitionError::ArchiveScan { .. })));
}

#[rstest]
fn archive_extension_is_configurable(source_tree: TempDir) {
    let root = utf8(&source_tree);
    let archives = collect_dependency_archives(&root, ".md").expect("scan should succeed");
    assert_eq!(
        archives.into_iter().collect::<Vec<_>>(),
        vec![root.join("README.md")]
    );
}
