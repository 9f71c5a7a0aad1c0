use std::sync::Arc;

use beanstalk::{Container, TypeInfo};

mod app {
    pub mod repository {
        use std::sync::Mutex;

        use beanstalk::{component, InstantiateErrorKind};

        pub trait UserRepository: Send + Sync {
            fn save(&self, name: &str) -> u64;
            fn find_all(&self) -> Vec<String>;
        }

        pub struct InMemoryUserRepository {
            users: Mutex<Vec<String>>,
        }

        #[component(provides(dyn UserRepository))]
        impl InMemoryUserRepository {
            #[construct]
            fn new() -> Result<Self, InstantiateErrorKind> {
                Ok(Self {
                    users: Mutex::new(Vec::new()),
                })
            }
        }

        impl UserRepository for InMemoryUserRepository {
            fn save(&self, name: &str) -> u64 {
                let mut users = self.users.lock().unwrap();
                users.push(name.to_owned());
                users.len() as u64
            }

            fn find_all(&self) -> Vec<String> {
                self.users.lock().unwrap().clone()
            }
        }
    }

    pub mod notification {
        use std::sync::atomic::{AtomicUsize, Ordering};

        use beanstalk::{component, InstantiateErrorKind};

        pub trait Notifier: Send + Sync {
            fn send(&self, message: &str);
            fn sent(&self) -> usize;
        }

        pub struct EmailNotifier {
            deliveries: AtomicUsize,
        }

        #[component(provides(dyn Notifier))]
        impl EmailNotifier {
            #[construct]
            fn new() -> Result<Self, InstantiateErrorKind> {
                Ok(Self {
                    deliveries: AtomicUsize::new(0),
                })
            }
        }

        impl Notifier for EmailNotifier {
            fn send(&self, _message: &str) {
                self.deliveries.fetch_add(1, Ordering::SeqCst);
            }

            fn sent(&self) -> usize {
                self.deliveries.load(Ordering::SeqCst)
            }
        }
    }

    pub mod service {
        use std::sync::Arc;

        use beanstalk::{component, Inject, InstantiateErrorKind};

        use super::{notification::Notifier, repository::UserRepository};

        pub trait UserService: Send + Sync {
            fn register(&self, name: &str) -> u64;
        }

        pub struct DefaultUserService {
            repository: Arc<dyn UserRepository>,
            notifier: Arc<dyn Notifier>,
        }

        #[component(provides(dyn UserService))]
        impl DefaultUserService {
            #[construct]
            fn new(
                Inject(repository): Inject<dyn UserRepository>,
                Inject(notifier): Inject<dyn Notifier>,
            ) -> Result<Self, InstantiateErrorKind> {
                Ok(Self { repository, notifier })
            }
        }

        impl UserService for DefaultUserService {
            fn register(&self, name: &str) -> u64 {
                let id = self.repository.save(name);
                self.notifier.send(&format!("welcome, {name}"));
                id
            }
        }
    }
}

mod ambiguity {
    use beanstalk::{component, InstantiateErrorKind};

    pub trait Channel: Send + Sync {
        fn name(&self) -> &'static str;
    }

    pub struct AlphaChannel;

    #[component(provides(dyn Channel))]
    impl AlphaChannel {
        #[construct]
        fn new() -> Result<Self, InstantiateErrorKind> {
            Ok(Self)
        }
    }

    impl Channel for AlphaChannel {
        fn name(&self) -> &'static str {
            "alpha"
        }
    }

    pub struct OmegaChannel;

    #[component(provides(dyn Channel))]
    impl OmegaChannel {
        #[construct]
        fn new() -> Result<Self, InstantiateErrorKind> {
            Ok(Self)
        }
    }

    impl Channel for OmegaChannel {
        fn name(&self) -> &'static str {
            "omega"
        }
    }
}

mod optional {
    use beanstalk::{component, InstantiateErrorKind};

    pub struct Tunable;

    #[component]
    impl Tunable {
        #[construct]
        fn new() -> Result<Self, InstantiateErrorKind> {
            Ok(Self)
        }
    }

    pub struct Widget {
        pub tunable: Option<Tunable>,
    }

    #[component]
    impl Widget {
        #[construct]
        fn new(tunable: Option<Tunable>) -> Result<Self, InstantiateErrorKind> {
            Ok(Self { tunable })
        }
    }
}

use app::{notification::Notifier, repository::UserRepository, service::UserService};

fn ptr_of<T: ?Sized>(bean: &Arc<T>) -> *const () {
    Arc::as_ptr(bean).cast()
}

#[test]
fn test_end_to_end_wiring() {
    let container = Container::initialize("components::app").unwrap();

    let service = container.get::<dyn UserService>().unwrap();
    let first = service.register("hong");
    let second = service.register("kim");
    assert_ne!(first, second);

    let repository = container.get::<dyn UserRepository>().unwrap();
    assert_eq!(repository.find_all(), vec!["hong".to_owned(), "kim".to_owned()]);

    let notifier = container.get::<dyn Notifier>().unwrap();
    assert_eq!(notifier.sent(), 2);
}

#[test]
fn test_singleton_identity() {
    let container = Container::initialize("components::app").unwrap();

    let first = container.get::<dyn UserService>().unwrap();
    let second = container.get::<dyn UserService>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let concrete = container.get::<app::repository::InMemoryUserRepository>().unwrap();
    let capability = container.get::<dyn UserRepository>().unwrap();
    assert_eq!(ptr_of(&concrete), ptr_of(&capability));
}

#[test]
fn test_containers_are_independent() {
    let first = Container::initialize("components::app").unwrap();
    let second = Container::initialize("components::app").unwrap();

    first.get::<dyn UserService>().unwrap().register("solo");

    assert_eq!(first.get::<dyn Notifier>().unwrap().sent(), 1);
    assert_eq!(second.get::<dyn Notifier>().unwrap().sent(), 0);
}

#[test]
fn test_last_scanned_capability_wins() {
    let container = Container::initialize("components::ambiguity").unwrap();

    let channel = container.get::<dyn ambiguity::Channel>().unwrap();
    assert_eq!(channel.name(), "omega");

    let omega = container.get::<ambiguity::OmegaChannel>().unwrap();
    assert_eq!(ptr_of(&channel), ptr_of(&omega));

    let alpha = container.get::<ambiguity::AlphaChannel>().unwrap();
    assert_ne!(ptr_of(&channel), ptr_of(&alpha));
}

#[test]
fn test_unmarked_parameter_is_not_wired() {
    let container = Container::initialize("components::optional").unwrap();

    let widget = container.get::<optional::Widget>().unwrap();
    assert!(widget.tunable.is_none());

    container.get::<optional::Tunable>().unwrap();
}

#[test]
fn test_nested_namespaces_are_scanned() {
    let container = Container::initialize("components").unwrap();

    container.get::<dyn UserService>().unwrap();
    container.get::<optional::Widget>().unwrap();
}

#[test]
fn test_sibling_namespaces_are_not_scanned() {
    let container = Container::initialize("components::app::repository").unwrap();

    container.get::<dyn UserRepository>().unwrap();
    assert!(container.get::<dyn UserService>().is_err());
}

#[test]
fn test_scan_reports_descriptors() {
    let descriptors = beanstalk::scan("components::app::service").unwrap();
    assert_eq!(descriptors.len(), 1);

    let descriptor = &descriptors[0];
    assert_eq!(descriptor.type_info, TypeInfo::of::<app::service::DefaultUserService>());
    assert_eq!(descriptor.capabilities.len(), 1);
    assert_eq!(descriptor.capabilities[0].type_info, TypeInfo::of::<dyn UserService>());
    assert_eq!(descriptor.dependencies.len(), 2);
    assert!(descriptor.dependencies.iter().all(|dependency| dependency.injected));

    // Scan order is (module path, type name): Tunable sorts before Widget.
    let descriptors = beanstalk::scan("components::optional").unwrap();
    assert_eq!(descriptors.len(), 2);

    let widget = &descriptors[1];
    assert_eq!(widget.type_info, TypeInfo::of::<optional::Widget>());
    assert_eq!(widget.dependencies.len(), 1);
    assert!(!widget.dependencies[0].injected);
    assert_eq!(widget.dependencies[0].type_info, TypeInfo::of::<optional::Tunable>());
}

#[test]
fn test_every_bean_is_registered() {
    let container = Container::initialize("components::app").unwrap();

    let beans = container.beans();
    assert_eq!(beans.len(), 6);
    assert!(beans.iter().all(|type_info| container.is_registered(type_info)));
}
