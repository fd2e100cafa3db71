//! Compiled-in content for every language.
//!
//! Both trees must stay structurally identical: same story/approach keys,
//! same experience and project ids in the same order, same URLs. The parity
//! tests at the bottom of `parity.rs` fail the build otherwise.

use crate::content::model::*;

// ==================== English Content ====================

pub static ENGLISH_CONTENT: ContentTree = ContentTree {
    navigation: Navigation {
        home: "Home",
        about: "About",
        experience: "Experience",
        projects: "Projects",
        contact: "Contact",
        language_toggle: "ES",
    },

    hero: Hero {
        greeting: "Hi, I'm",
        name: "Alex Morgan",
        role: "Full-Stack Developer",
        tagline: "I build fast, accessible web applications and the APIs behind them.",
        primary_cta: "View my work",
        secondary_cta: "Get in touch",
    },

    about: About {
        title: "About Me",
        subtitle: "From logistics floors to production deploys",
        story_title: "My Story",
        story: &[
            StoryItem {
                key: StoryKey::Origins,
                title: "Where it started",
                body: "I spent five years coordinating warehouse operations, where I kept \
                       automating spreadsheets until I realised I enjoyed the automation more \
                       than the logistics.",
                icon: IconKey::Compass,
            },
            StoryItem {
                key: StoryKey::Bootcamp,
                title: "The bootcamp",
                body: "In 2020 I joined an intensive full-stack bootcamp: six months of \
                       JavaScript, React, Node.js and SQL, finishing with a team capstone \
                       that shipped to real users.",
                icon: IconKey::GraduationCap,
            },
            StoryItem {
                key: StoryKey::FirstRole,
                title: "First role",
                body: "My first developer job at a small product studio taught me code review, \
                       testing and how to own a feature from ticket to production.",
                icon: IconKey::Rocket,
            },
            StoryItem {
                key: StoryKey::Today,
                title: "Today",
                body: "I work across the stack on healthcare software, with a soft spot for \
                       type-safe APIs and interfaces that work for everyone.",
                icon: IconKey::Heart,
            },
        ],
        approach_title: "How I Work",
        approach: &[
            ApproachItem {
                key: ApproachKey::UserFocus,
                title: "Users first",
                description: "Every feature starts with the person who will use it.",
                icon: IconKey::Users,
            },
            ApproachItem {
                key: ApproachKey::CleanCode,
                title: "Readable code",
                description: "Small modules, clear names and tests that document behaviour.",
                icon: IconKey::Code,
            },
            ApproachItem {
                key: ApproachKey::Collaboration,
                title: "Collaboration",
                description: "Design, product and engineering decide together.",
                icon: IconKey::Layers,
            },
            ApproachItem {
                key: ApproachKey::Learning,
                title: "Always learning",
                description: "Currently exploring Rust and edge runtimes.",
                icon: IconKey::Lightbulb,
            },
        ],
    },

    experience: ExperienceSection {
        title: "Experience",
        subtitle: "Where I've worked and what I've shipped",
        highlights_label: "Highlights",
        technologies_label: "Technologies",
        entries: &[
            ExperienceEntry {
                id: "lumen-health",
                organization: "Lumen Health",
                role: "Full-Stack Developer",
                period: "Jan 2023 - Present",
                duration: "2+ years",
                location: "Remote",
                tag: "Full-time",
                description: "Building the patient scheduling platform used by clinics across \
                              three countries.",
                highlights: &[
                    "Cut appointment booking time by 40% with a redesigned flow",
                    "Led the migration from REST polling to WebSocket updates",
                    "Raised test coverage of the scheduling service from 35% to 85%",
                ],
                technologies: &["TypeScript", "React", "Node.js", "PostgreSQL", "AWS"],
                icon: IconKey::Briefcase,
            },
            ExperienceEntry {
                id: "northwind-labs",
                organization: "Northwind Labs",
                role: "Software Developer",
                period: "Mar 2021 - Dec 2022",
                duration: "1 yr 10 mos",
                location: "Valencia, Spain",
                tag: "Full-time",
                description: "Product studio building web and mobile apps for early-stage \
                              startups.",
                highlights: &[
                    "Delivered six client MVPs from first sprint to launch",
                    "Introduced a shared component library used by every project",
                ],
                technologies: &["JavaScript", "React", "React Native", "Express", "MongoDB"],
                icon: IconKey::Code,
            },
            ExperienceEntry {
                id: "launchpad-bootcamp",
                organization: "Launchpad Coding Bootcamp",
                role: "Full-Stack Web Development",
                period: "Sep 2020 - Feb 2021",
                duration: "6 months",
                location: "Madrid, Spain",
                tag: "Education",
                description: "Intensive programme covering front end, back end and deployment.",
                highlights: &[
                    "Capstone project selected for demo day",
                    "Peer mentor for the following cohort",
                ],
                technologies: &["HTML", "CSS", "JavaScript", "React", "Node.js", "SQL"],
                icon: IconKey::GraduationCap,
            },
            ExperienceEntry {
                id: "harbor-logistics",
                organization: "Harbor Logistics",
                role: "Operations Coordinator",
                period: "Jun 2015 - Aug 2020",
                duration: "5 years",
                location: "Valencia, Spain",
                tag: "Previous career",
                description: "Coordinated inbound operations for a regional distribution \
                              centre.",
                highlights: &[
                    "Automated daily stock reports, saving ten hours a week",
                    "Trained new team members on warehouse systems",
                ],
                technologies: &[],
                icon: IconKey::Wrench,
            },
        ],
    },

    projects: ProjectsSection {
        title: "Projects",
        subtitle: "A selection of things I've built",
        filters: FilterLabels {
            all: "All",
            web: "Web",
            mobile: "Mobile",
            backend: "Backend",
            tooling: "Tooling",
        },
        demo_label: "Live demo",
        source_label: "Source code",
        features_label: "Key features",
        confidential_notice: "Confidential client work",
        entries: &[
            ProjectEntry {
                id: "taskflow",
                title: "TaskFlow",
                short_description: "Kanban boards with real-time collaboration.",
                long_description: "A collaborative task manager with drag-and-drop boards, \
                                   live cursors and offline support.",
                category: ProjectCategory::Web,
                status: "Live",
                technologies: &["React", "TypeScript", "Node.js", "Socket.IO", "PostgreSQL"],
                features: &[
                    "Real-time updates for every board member",
                    "Offline editing with background sync",
                    "Keyboard-first navigation",
                ],
                demo_url: Some("https://taskflow.alexmorgan.dev"),
                source_url: Some("https://github.com/alexmorgan-dev/taskflow"),
                image: Some("/images/projects/taskflow.png"),
                confidential: false,
            },
            ProjectEntry {
                id: "fittrack",
                title: "FitTrack",
                short_description: "Workout logging app for iOS and Android.",
                long_description: "A cross-platform mobile app for logging workouts, tracking \
                                   personal records and sharing routines.",
                category: ProjectCategory::Mobile,
                status: "In Development",
                technologies: &["React Native", "Expo", "SQLite"],
                features: &[
                    "Works fully offline",
                    "Progress charts per exercise",
                ],
                demo_url: None,
                source_url: Some("https://github.com/alexmorgan-dev/fittrack"),
                image: Some("/images/projects/fittrack.png"),
                confidential: false,
            },
            ProjectEntry {
                id: "clinic-ledger",
                title: "Clinic Ledger API",
                short_description: "Billing API for a network of private clinics.",
                long_description: "A billing and invoicing service handling insurance claims \
                                   and patient payments for a healthcare client.",
                category: ProjectCategory::Backend,
                status: "Completed",
                technologies: &["Node.js", "NestJS", "PostgreSQL", "Redis"],
                features: &[
                    "Idempotent payment processing",
                    "Audit trail for every invoice change",
                ],
                demo_url: Some("https://ledger.internal.example"),
                source_url: None,
                image: None,
                confidential: true,
            },
            ProjectEntry {
                id: "devkit-cli",
                title: "devkit",
                short_description: "CLI that scaffolds and lints new services.",
                long_description: "A small command-line tool that generates service templates \
                                   with CI, linting and tests preconfigured.",
                category: ProjectCategory::Tooling,
                status: "Open Source",
                technologies: &["Rust", "clap"],
                features: &[
                    "Project templates for web and API services",
                    "Single static binary",
                ],
                demo_url: None,
                source_url: Some("https://github.com/alexmorgan-dev/devkit"),
                image: None,
                confidential: false,
            },
            ProjectEntry {
                id: "portfolio",
                title: "This Portfolio",
                short_description: "The bilingual site you are reading now.",
                long_description: "A bilingual portfolio with per-page search metadata and \
                                   structured data.",
                category: ProjectCategory::Web,
                status: "Live",
                technologies: &["Rust", "axum", "TypeScript"],
                features: &[
                    "English and Spanish content",
                    "Per-route SEO metadata",
                ],
                demo_url: Some("https://alexmorgan.dev"),
                source_url: Some("https://github.com/alexmorgan-dev/portfolio"),
                image: Some("/images/projects/portfolio.png"),
                confidential: false,
            },
        ],
    },

    contact: Contact {
        title: "Contact",
        subtitle: "Have a project in mind? Let's talk.",
        email: "hello@alexmorgan.dev",
        location: "Valencia, Spain",
        availability: "Open to full-time and freelance opportunities",
        form: ContactForm {
            name_label: "Name",
            email_label: "Email",
            subject_label: "Subject",
            message_label: "Message",
            submit_label: "Send message",
        },
    },

    footer: Footer {
        tagline: "Building for the web, one commit at a time.",
        copyright: "© {year} Alex Morgan. All rights reserved.",
        built_with: "Built with Rust and TypeScript",
    },
};

// ==================== Spanish Content ====================

pub static SPANISH_CONTENT: ContentTree = ContentTree {
    navigation: Navigation {
        home: "Inicio",
        about: "Sobre mí",
        experience: "Experiencia",
        projects: "Proyectos",
        contact: "Contacto",
        language_toggle: "EN",
    },

    hero: Hero {
        greeting: "Hola, soy",
        name: "Alex Morgan",
        role: "Desarrollador Full-Stack",
        tagline: "Creo aplicaciones web rápidas y accesibles, y las APIs que las sostienen.",
        primary_cta: "Ver mi trabajo",
        secondary_cta: "Contactar",
    },

    about: About {
        title: "Sobre mí",
        subtitle: "De la logística a los despliegues en producción",
        story_title: "Mi historia",
        story: &[
            StoryItem {
                key: StoryKey::Origins,
                title: "Los inicios",
                body: "Pasé cinco años coordinando operaciones de almacén, automatizando hojas \
                       de cálculo hasta darme cuenta de que disfrutaba más automatizando que \
                       con la logística.",
                icon: IconKey::Compass,
            },
            StoryItem {
                key: StoryKey::Bootcamp,
                title: "El bootcamp",
                body: "En 2020 entré en un bootcamp intensivo full-stack: seis meses de \
                       JavaScript, React, Node.js y SQL, con un proyecto final en equipo que \
                       llegó a usuarios reales.",
                icon: IconKey::GraduationCap,
            },
            StoryItem {
                key: StoryKey::FirstRole,
                title: "Primer empleo",
                body: "Mi primer trabajo como desarrollador en un pequeño estudio de producto me \
                       enseñó revisión de código, testing y a llevar una funcionalidad del \
                       ticket a producción.",
                icon: IconKey::Rocket,
            },
            StoryItem {
                key: StoryKey::Today,
                title: "Hoy",
                body: "Trabajo en todo el stack en software sanitario, con debilidad por las \
                       APIs tipadas y las interfaces que funcionan para todos.",
                icon: IconKey::Heart,
            },
        ],
        approach_title: "Cómo trabajo",
        approach: &[
            ApproachItem {
                key: ApproachKey::UserFocus,
                title: "Primero las personas",
                description: "Cada funcionalidad empieza por quien la va a usar.",
                icon: IconKey::Users,
            },
            ApproachItem {
                key: ApproachKey::CleanCode,
                title: "Código legible",
                description: "Módulos pequeños, nombres claros y tests que documentan el \
                              comportamiento.",
                icon: IconKey::Code,
            },
            ApproachItem {
                key: ApproachKey::Collaboration,
                title: "Colaboración",
                description: "Diseño, producto e ingeniería deciden juntos.",
                icon: IconKey::Layers,
            },
            ApproachItem {
                key: ApproachKey::Learning,
                title: "Aprendizaje continuo",
                description: "Ahora mismo explorando Rust y runtimes en el edge.",
                icon: IconKey::Lightbulb,
            },
        ],
    },

    experience: ExperienceSection {
        title: "Experiencia",
        subtitle: "Dónde he trabajado y qué he construido",
        highlights_label: "Logros",
        technologies_label: "Tecnologías",
        entries: &[
            ExperienceEntry {
                id: "lumen-health",
                organization: "Lumen Health",
                role: "Desarrollador Full-Stack",
                period: "ene. 2023 - actualidad",
                duration: "Más de 2 años",
                location: "Remoto",
                tag: "Jornada completa",
                description: "Desarrollo de la plataforma de citas que usan clínicas de tres \
                              países.",
                highlights: &[
                    "Reduje un 40% el tiempo de reserva con un flujo rediseñado",
                    "Lideré la migración de sondeo REST a actualizaciones por WebSocket",
                    "Subí la cobertura de tests del servicio de citas del 35% al 85%",
                ],
                technologies: &["TypeScript", "React", "Node.js", "PostgreSQL", "AWS"],
                icon: IconKey::Briefcase,
            },
            ExperienceEntry {
                id: "northwind-labs",
                organization: "Northwind Labs",
                role: "Desarrollador de Software",
                period: "mar. 2021 - dic. 2022",
                duration: "1 año 10 meses",
                location: "Valencia, España",
                tag: "Jornada completa",
                description: "Estudio de producto que crea apps web y móviles para startups en \
                              fase inicial.",
                highlights: &[
                    "Entregué seis MVP de clientes desde el primer sprint hasta el lanzamiento",
                    "Introduje una librería de componentes compartida por todos los proyectos",
                ],
                technologies: &["JavaScript", "React", "React Native", "Express", "MongoDB"],
                icon: IconKey::Code,
            },
            ExperienceEntry {
                id: "launchpad-bootcamp",
                organization: "Launchpad Coding Bootcamp",
                role: "Desarrollo Web Full-Stack",
                period: "sept. 2020 - feb. 2021",
                duration: "6 meses",
                location: "Madrid, España",
                tag: "Formación",
                description: "Programa intensivo de front end, back end y despliegue.",
                highlights: &[
                    "Proyecto final seleccionado para el demo day",
                    "Mentor de la siguiente promoción",
                ],
                technologies: &["HTML", "CSS", "JavaScript", "React", "Node.js", "SQL"],
                icon: IconKey::GraduationCap,
            },
            ExperienceEntry {
                id: "harbor-logistics",
                organization: "Harbor Logistics",
                role: "Coordinador de Operaciones",
                period: "jun. 2015 - ago. 2020",
                duration: "5 años",
                location: "Valencia, España",
                tag: "Carrera anterior",
                description: "Coordinación de las operaciones de entrada de un centro de \
                              distribución regional.",
                highlights: &[
                    "Automaticé los informes diarios de stock, ahorrando diez horas semanales",
                    "Formé a nuevos compañeros en los sistemas del almacén",
                ],
                technologies: &[],
                icon: IconKey::Wrench,
            },
        ],
    },

    projects: ProjectsSection {
        title: "Proyectos",
        subtitle: "Una selección de cosas que he construido",
        filters: FilterLabels {
            all: "Todos",
            web: "Web",
            mobile: "Móvil",
            backend: "Backend",
            tooling: "Herramientas",
        },
        demo_label: "Demo en vivo",
        source_label: "Código fuente",
        features_label: "Características",
        confidential_notice: "Trabajo confidencial para cliente",
        entries: &[
            ProjectEntry {
                id: "taskflow",
                title: "TaskFlow",
                short_description: "Tableros kanban con colaboración en tiempo real.",
                long_description: "Un gestor de tareas colaborativo con tableros de arrastrar y \
                                   soltar, cursores en vivo y soporte sin conexión.",
                category: ProjectCategory::Web,
                status: "En producción",
                technologies: &["React", "TypeScript", "Node.js", "Socket.IO", "PostgreSQL"],
                features: &[
                    "Actualizaciones en tiempo real para todo el equipo",
                    "Edición sin conexión con sincronización en segundo plano",
                    "Navegación pensada para teclado",
                ],
                demo_url: Some("https://taskflow.alexmorgan.dev"),
                source_url: Some("https://github.com/alexmorgan-dev/taskflow"),
                image: Some("/images/projects/taskflow.png"),
                confidential: false,
            },
            ProjectEntry {
                id: "fittrack",
                title: "FitTrack",
                short_description: "App para registrar entrenamientos en iOS y Android.",
                long_description: "Una app móvil multiplataforma para registrar entrenamientos, \
                                   seguir récords personales y compartir rutinas.",
                category: ProjectCategory::Mobile,
                status: "En desarrollo",
                technologies: &["React Native", "Expo", "SQLite"],
                features: &[
                    "Funciona completamente sin conexión",
                    "Gráficas de progreso por ejercicio",
                ],
                demo_url: None,
                source_url: Some("https://github.com/alexmorgan-dev/fittrack"),
                image: Some("/images/projects/fittrack.png"),
                confidential: false,
            },
            ProjectEntry {
                id: "clinic-ledger",
                title: "Clinic Ledger API",
                short_description: "API de facturación para una red de clínicas privadas.",
                long_description: "Un servicio de facturación que gestiona reclamaciones a \
                                   aseguradoras y pagos de pacientes para un cliente sanitario.",
                category: ProjectCategory::Backend,
                status: "Completado",
                technologies: &["Node.js", "NestJS", "PostgreSQL", "Redis"],
                features: &[
                    "Procesamiento de pagos idempotente",
                    "Registro de auditoría de cada cambio en facturas",
                ],
                demo_url: Some("https://ledger.internal.example"),
                source_url: None,
                image: None,
                confidential: true,
            },
            ProjectEntry {
                id: "devkit-cli",
                title: "devkit",
                short_description: "CLI que genera y revisa nuevos servicios.",
                long_description: "Una pequeña herramienta de línea de comandos que genera \
                                   plantillas de servicios con CI, linting y tests ya \
                                   configurados.",
                category: ProjectCategory::Tooling,
                status: "Código abierto",
                technologies: &["Rust", "clap"],
                features: &[
                    "Plantillas para servicios web y APIs",
                    "Un único binario estático",
                ],
                demo_url: None,
                source_url: Some("https://github.com/alexmorgan-dev/devkit"),
                image: None,
                confidential: false,
            },
            ProjectEntry {
                id: "portfolio",
                title: "Este portfolio",
                short_description: "El sitio bilingüe que estás leyendo.",
                long_description: "Un portfolio bilingüe con metadatos de búsqueda por página y \
                                   datos estructurados.",
                category: ProjectCategory::Web,
                status: "En producción",
                technologies: &["Rust", "axum", "TypeScript"],
                features: &[
                    "Contenido en inglés y español",
                    "Metadatos SEO por ruta",
                ],
                demo_url: Some("https://alexmorgan.dev"),
                source_url: Some("https://github.com/alexmorgan-dev/portfolio"),
                image: Some("/images/projects/portfolio.png"),
                confidential: false,
            },
        ],
    },

    contact: Contact {
        title: "Contacto",
        subtitle: "¿Tienes un proyecto en mente? Hablemos.",
        email: "hello@alexmorgan.dev",
        location: "Valencia, España",
        availability: "Disponible para empleo a tiempo completo y proyectos freelance",
        form: ContactForm {
            name_label: "Nombre",
            email_label: "Correo electrónico",
            subject_label: "Asunto",
            message_label: "Mensaje",
            submit_label: "Enviar mensaje",
        },
    },

    footer: Footer {
        tagline: "Construyendo para la web, commit a commit.",
        copyright: "© {year} Alex Morgan. Todos los derechos reservados.",
        built_with: "Hecho con Rust y TypeScript",
    },
};
