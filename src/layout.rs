//! The Smart Barangay System monorepo layout.

use crate::tree::{dir, file, Entry};

/// Directory, relative to the working directory, that the skeleton is generated into.
pub const ROOT_DIR: &str = "smart-barangay-system";

const BACKEND_MAIN: &str = "import { NestFactory } from '@nestjs/core';
import { AppModule } from './app.module';

async function bootstrap() {
  const app = await NestFactory.create(AppModule);
  await app.listen(3001);
  console.log('Backend running on http://localhost:3001');
}
bootstrap();
";

const BACKEND_APP_MODULE: &str = "import { Module } from '@nestjs/common';
import { AuthModule } from './modules/auth/auth.module';
import { ResidentsModule } from './modules/residents/residents.module';
import { GisModule } from './modules/gis/gis.module';
import { AppController } from './app.controller';

@Module({
  imports: [AuthModule, ResidentsModule, GisModule],
  controllers: [AppController],
})
export class AppModule {}
";

const BACKEND_APP_CONTROLLER: &str = "import { Controller, Get } from '@nestjs/common';

@Controller()
export class AppController {
  @Get()
  getRoot(): string {
    return '🚀 Smart Barangay Backend is running!';
  }
}
";

const BACKEND_PACKAGE_JSON: &str = r#"{
  "name": "backend",
  "version": "1.0.0",
  "scripts": {
    "start": "nest start",
    "start:dev": "nest start --watch"
  },
  "dependencies": {
    "@nestjs/common": "^10.0.0",
    "@nestjs/core": "^10.0.0",
    "@nestjs/platform-express": "^10.0.0",
    "reflect-metadata": "^0.2.0",
    "rxjs": "^7.8.0",
    "pg": "^8.10.0",
    "@supabase/supabase-js": "^2.42.0"
  },
  "devDependencies": {
    "typescript": "^5.3.0",
    "@nestjs/cli": "^10.0.0",
    "@types/node": "^20.0.0"
  }
}"#;

const FRONTEND_PACKAGE_JSON: &str = r#"{
  "name": "frontend",
  "version": "1.0.0",
  "scripts": {
    "dev": "next dev",
    "build": "next build",
    "start": "next start"
  },
  "dependencies": {
    "next": "15.0.0",
    "react": "19.0.0",
    "react-dom": "19.0.0",
    "tailwindcss": "^3.4.0",
    "@supabase/supabase-js": "^2.42.0"
  },
  "devDependencies": {
    "typescript": "^5.3.0",
    "autoprefixer": "^10.4.0",
    "postcss": "^8.4.0"
  }
}"#;

const FRONTEND_TSCONFIG: &str = r#"{
  "compilerOptions": {
    "jsx": "preserve",
    "strict": true,
    "module": "ESNext",
    "target": "ES6",
    "baseUrl": "./src"
  }
}"#;

const ROOT_PACKAGE_JSON: &str = r#"{
  "name": "smart-barangay-system",
  "private": true,
  "workspaces": [
    "apps/*",
    "packages/*"
  ],
  "scripts": {
    "dev": "turbo run dev --parallel"
  },
  "devDependencies": {
    "turbo": "^2.0.0"
  }
}"#;

const TSCONFIG_BASE: &str = r#"{
  "compilerOptions": {
    "strict": true,
    "moduleResolution": "node",
    "esModuleInterop": true,
    "skipLibCheck": true
  }
}"#;

const TURBO_JSON: &str = r#"{
  "$schema": "https://turbo.build/schema.json",
  "pipeline": {
    "dev": {
      "cache": false
    }
  }
}"#;

/// Everything below [`ROOT_DIR`] except the root-level [`BASE_FILES`].
pub static STRUCTURE: &[Entry] = &[
    dir(
        "apps",
        &[
            dir(
                "backend",
                &[
                    dir(
                        "src",
                        &[
                            dir(
                                "modules",
                                &[
                                    dir(
                                        "auth",
                                        &[
                                            file("auth.controller.ts", ""),
                                            file("auth.service.ts", ""),
                                            file("auth.module.ts", ""),
                                        ],
                                    ),
                                    dir(
                                        "residents",
                                        &[
                                            file("residents.controller.ts", ""),
                                            file("residents.service.ts", ""),
                                            file("residents.module.ts", ""),
                                        ],
                                    ),
                                    dir(
                                        "gis",
                                        &[
                                            file("gis.controller.ts", ""),
                                            file("gis.service.ts", ""),
                                            file("gis.module.ts", ""),
                                        ],
                                    ),
                                ],
                            ),
                            file("main.ts", BACKEND_MAIN),
                            file("app.module.ts", BACKEND_APP_MODULE),
                            file("app.controller.ts", BACKEND_APP_CONTROLLER),
                        ],
                    ),
                    file("package.json", BACKEND_PACKAGE_JSON),
                ],
            ),
            dir(
                "frontend",
                &[
                    dir(
                        "src",
                        &[dir(
                            "app",
                            &[
                                file(
                                    "page.tsx",
                                    "export default function Home() { return <h1>Welcome to Smart Barangay System</h1>; }",
                                ),
                                file(
                                    "layout.tsx",
                                    "export default function Layout({ children }) { return <html><body>{children}</body></html>; }",
                                ),
                            ],
                        )],
                    ),
                    file("package.json", FRONTEND_PACKAGE_JSON),
                    file(
                        "tailwind.config.js",
                        "module.exports = { content: ['./src/**/*.{js,ts,jsx,tsx}'], theme: { extend: {} }, plugins: [] }",
                    ),
                    file("tsconfig.json", FRONTEND_TSCONFIG),
                ],
            ),
        ],
    ),
    dir(
        "packages",
        &[
            dir(
                "shared-types",
                &[file(
                    "index.ts",
                    "export interface Resident { id: number; name: string; address: string; }",
                )],
            ),
            dir(
                "utils",
                &[file(
                    "index.ts",
                    "export function formatName(name: string) { return name.toUpperCase(); }",
                )],
            ),
        ],
    ),
    dir(
        "supabase",
        &[
            dir(
                "migrations",
                &[file(
                    "001_init.sql",
                    "-- Example SQL migration\nCREATE TABLE residents (id SERIAL PRIMARY KEY, name TEXT, address TEXT);",
                )],
            ),
            dir(
                "functions",
                &[file(
                    "on_new_resident.ts",
                    "// Example Supabase Edge Function\nexport const handler = async (event) => { console.log('New resident added'); };",
                )],
            ),
        ],
    ),
    dir(
        "docs",
        &[file(
            "README.md",
            "# Smart Barangay Management System\nGenerated project structure.\n",
        )],
    ),
];

/// Root-level files, written directly under [`ROOT_DIR`].
pub static BASE_FILES: &[(&str, &str)] = &[
    ("package.json", ROOT_PACKAGE_JSON),
    ("tsconfig.base.json", TSCONFIG_BASE),
    ("turbo.json", TURBO_JSON),
    (".env.example", "SUPABASE_URL=\nSUPABASE_ANON_KEY=\n"),
    (
        "README.md",
        "# Smart Barangay Management System\n\nMonorepo powered by NestJS + Next.js + Supabase.",
    ),
];

/// Manual follow-up steps printed once generation succeeds.
pub const NEXT_STEPS: &[&str] = &[
    "cd smart-barangay-system",
    "npm install --workspaces",
    "cd apps/backend && npm run start:dev  # start API",
    "cd ../frontend && npm run dev         # start web app",
];
