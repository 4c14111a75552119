//! Bundled sample posting and resume for trying the tool without files

pub const DEMO_JOB_DESCRIPTION: &str = r#"Senior Frontend Engineer

We are looking for a Senior Frontend Engineer to build modern web applications.

Responsibilities:
- Build pixel-perfect, buttery smooth UIs across both mobile and desktop.
- Leverage React.js and TypeScript to build scalable frontend architecture.
- Optimize application for maximum speed and scalability.
- Implement responsive designs using Tailwind CSS.
- Collaborate with backend engineers to integrate RESTful APIs.
- Write unit and integration tests using Jest and React Testing Library.
- Maintain code quality through code reviews and documentation.

Requirements:
- 5+ years of experience with JavaScript (ES6+) and modern frameworks.
- Strong proficiency in React.js, Redux, and React Hooks.
- Deep understanding of HTML5, CSS3, and SCSS.
- Experience with TypeScript is mandatory.
- Familiarity with modern build pipelines and tools (Webpack, Vite).
- Knowledge of Git and CI/CD workflows.
- Experience with Agile methodologies.
- Bonus: Experience with Next.js and Server Side Rendering (SSR)."#;

pub const DEMO_RESUME: &str = r#"Alex Developer
San Francisco, CA | alex.dev@email.com | (555) 123-4567
linkedin.com/in/alexdev | github.com/alexdev

SUMMARY
Passionate Frontend Developer with 4 years of experience building responsive web applications. Specialized in the React ecosystem and UI/UX implementation.

SKILLS
Languages: JavaScript (ES6+), HTML5, CSS3, Python
Frameworks: React.js, Vue.js, Bootstrap, Tailwind CSS
Tools: Git, Webpack, npm, Figma, Jira
Testing: Jest, Cypress

EXPERIENCE
Frontend Developer | Tech Solutions Inc.
2020 - Present
- Developed and maintained the main company dashboard using React.js and Redux.
- Reduced page load time by 40% through code splitting and image optimization.
- Collaborated with UX designers to implement responsive designs.
- Integrated REST APIs for real-time data visualization.

Junior Web Developer | StartUp Creative
2018 - 2020
- Built landing pages using HTML, CSS, and vanilla JavaScript.
- Assisted in migrating legacy code to modern frameworks.
- Fixed bugs and improved cross-browser compatibility.

EDUCATION
Bachelor of Science in Computer Science
University of Technology, 2018
"#;
