use leptos::prelude::*;

use crate::components::{Footer, NavBar};
use crate::icons::{ExternalLinkIcon, GithubIcon, LinkedinIcon, MailIcon};
use crate::projects::{self, Project};

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="home">
            <HeroBanner/>
            <ProjectGallery/>
            <AboutSection/>
            <ContactSection/>
        </main>
        <Footer/>
    }
}

#[component]
pub fn HeroBanner() -> impl IntoView {
    view! {
        <header class="hero">
            <h1>"Web Developer & Designer"</h1>
            <p>
                "Creating beautiful, functional, and user-friendly websites that help businesses grow online."
            </p>
        </header>
    }
}

#[component]
pub fn ProjectGallery() -> impl IntoView {
    view! {
        <section id="projects" class="projects">
            <h2>"Featured Projects"</h2>
            <div class="project-grid">
                {projects::showcase()
                    .into_iter()
                    .map(|project| view! { <ProjectCard project/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let alt = project.title.clone();
    view! {
        <article class="project-card">
            <img src=project.image alt=alt/>
            <div class="card-body">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <ul class="tech-badges">
                    {project
                        .technologies
                        .into_iter()
                        .map(|label| view! { <li>{label}</li> })
                        .collect_view()}
                </ul>
                <a class="project-link" href=project.link>
                    "View Project " <ExternalLinkIcon/>
                </a>
            </div>
        </article>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="about-photo">
                <img src="https://i.imgur.com/Q4WEbzE.jpg" alt="Brooklynne Matos"/>
            </div>
            <div class="about-text">
                <h2>"About Me"</h2>
                <p>
                    "Hi, I'm Brooklynne, a passionate web developer dedicated to creating modern, responsive, and user-friendly websites. With experience in front-end development, I specialize in HTML, CSS, JavaScript, and React, crafting websites that not only look great but function seamlessly."
                </p>
                <p>
                    "I've worked on projects ranging from business websites to custom web applications, including a construction company website and various other side projects related to my major. My goal is to build clean, efficient, and engaging digital experiences that help businesses and individuals establish a strong online presence."
                </p>
                <p>
                    "Beyond web development, I'm expanding my skills in machine learning and AI, exploring ways to integrate intelligent solutions into web applications. I believe in continuous learning and staying up to date with the latest technologies to provide the best possible solutions for my clients."
                </p>
                <p class="about-pitch">
                    "\u{1f680} Whether you need a simple landing page, a full-scale business website, or advanced functionality, I'm here to help bring your vision to life."
                </p>
            </div>
        </section>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <h2>"Get in Touch"</h2>
            <div class="contact-links">
                <a href="mailto:brooklynnehill451@gmail.com">
                    <MailIcon/> "Email"
                </a>
                <a href="https://github.com/brooklynnematos/" target="_blank" rel="noopener noreferrer">
                    <GithubIcon/> "GitHub"
                </a>
                <a
                    href="https://www.linkedin.com/in/brooklynne-matos-3b2144b7"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <LinkedinIcon/> "LinkedIn"
                </a>
            </div>
        </section>
    }
}
